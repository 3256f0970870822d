//! Route table for the users resource

use axum::{routing::get, Router};

use crate::{handlers, repository::UserRepository, state::AppState};

/// Build the five user routes over the given state
///
/// | Method | Path          | Handler        |
/// |--------|---------------|----------------|
/// | GET    | `/users`      | `list_users`   |
/// | GET    | `/users/{id}` | `get_user`     |
/// | POST   | `/users`      | `create_user`  |
/// | PUT    | `/users/{id}` | `update_user`  |
/// | DELETE | `/users/{id}` | `delete_user`  |
pub fn router<R: UserRepository>(state: AppState<R>) -> Router {
    Router::new()
        .route(
            "/users",
            get(handlers::list_users::<R>).post(handlers::create_user::<R>),
        )
        .route(
            "/users/{id}",
            get(handlers::get_user::<R>)
                .put(handlers::update_user::<R>)
                .delete(handlers::delete_user::<R>),
        )
        .with_state(state)
}
