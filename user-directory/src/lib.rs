//! # user-directory
//!
//! HTTP CRUD service over a single PostgreSQL `users` table.
//!
//! | Method | Path          | Success response                      |
//! |--------|---------------|---------------------------------------|
//! | GET    | `/users`      | JSON array of users (`[]` when empty) |
//! | GET    | `/users/{id}` | JSON user                             |
//! | POST   | `/users`      | `User created successfully`           |
//! | PUT    | `/users/{id}` | `User updated successfully`           |
//! | DELETE | `/users/{id}` | `User deleted successfully`           |
//!
//! Failures never take the process down: missing rows are 404, malformed ids
//! and bodies are 400, and database errors are 500, all with a JSON body.
//!
//! ## Example
//!
//! ```rust,no_run
//! use user_directory::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let pool = create_pool(&config.database).await?;
//!     let state = AppState::new(PgUserRepository::new(pool));
//!
//!     Server::new(config).serve(router(state)).await
//! }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod repository;
pub mod routes;
pub mod server;
pub mod state;

pub mod prelude {
    pub use crate::config::{Config, CorsConfig, DatabaseConfig, ServiceConfig};
    pub use crate::database::create_pool;
    pub use crate::error::{
        DatabaseError, DatabaseErrorKind, DatabaseOperation, Error, ErrorResponse, Result,
    };
    pub use crate::models::{User, UserId, UserPayload};
    pub use crate::observability::init_tracing;
    pub use crate::repository::{MemoryUserRepository, PgUserRepository, UserRepository};
    pub use crate::routes::router;
    pub use crate::server::Server;
    pub use crate::state::AppState;
}
