//! Application state shared across handlers

use std::sync::Arc;

use crate::repository::UserRepository;

/// Application state shared across handlers
///
/// Holds the injected repository. Cloning is cheap: the repository sits behind an `Arc`.
pub struct AppState<R> {
    users: Arc<R>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
        }
    }
}

impl<R: UserRepository> AppState<R> {
    /// Create a new AppState around the given repository
    pub fn new(users: R) -> Self {
        Self {
            users: Arc::new(users),
        }
    }

    /// Get the user repository
    pub fn users(&self) -> &R {
        &self.users
    }
}
