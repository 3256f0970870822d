//! Data models for the users table

use serde::{Deserialize, Serialize};

/// Database-assigned user identifier (`SERIAL` column)
pub type UserId = i32;

/// A row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Body accepted by create and update
///
/// Both fields are required. Any `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}

impl UserPayload {
    /// Materialize the payload as a stored row
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}
