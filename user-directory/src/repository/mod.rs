//! Persistence seam for the users table
//!
//! Handlers are generic over [`UserRepository`], so the PostgreSQL pool is an
//! injected dependency rather than process-wide state.
//!
//! - [`PgUserRepository`]: one parameterized statement per call against a `PgPool`
//! - [`MemoryUserRepository`]: an in-process table for tests and local runs

mod memory;
mod postgres;

pub use memory::MemoryUserRepository;
pub use postgres::PgUserRepository;

use std::future::Future;

use crate::error::Result;
use crate::models::{User, UserId, UserPayload};

/// CRUD operations over the `users` table
///
/// Uses RPITIT so implementations can be written with plain `async fn`; the
/// returned futures must be `Send` to be driven by axum handlers.
pub trait UserRepository: Send + Sync + 'static {
    /// Every row, in whatever order the store yields them
    fn list(&self) -> impl Future<Output = Result<Vec<User>>> + Send;

    /// Returns `Ok(None)` if no row has this id.
    fn find_by_id(&self, id: UserId) -> impl Future<Output = Result<Option<User>>> + Send;

    /// Insert a row and return it with its assigned id
    fn create(&self, data: UserPayload) -> impl Future<Output = Result<User>> + Send;

    /// Overwrite name and email. Returns `false` if no row matched.
    fn update(&self, id: UserId, data: UserPayload)
        -> impl Future<Output = Result<bool>> + Send;

    /// Returns `false` if no row matched.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<bool>> + Send;
}
