//! HTTP handlers for the users resource
//!
//! Each handler issues exactly one repository call. Extraction failures are
//! taken as `Result` so they surface through [`Error`] as JSON 400 responses.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use tracing::{debug, info, instrument};

use crate::{
    error::{Error, Result},
    models::{User, UserId, UserPayload},
    repository::UserRepository,
    state::AppState,
};

pub const USER_CREATED: &str = "User created successfully";
pub const USER_UPDATED: &str = "User updated successfully";
pub const USER_DELETED: &str = "User deleted successfully";

type IdParam = std::result::Result<Path<UserId>, PathRejection>;
type Body = std::result::Result<Json<UserPayload>, JsonRejection>;

fn not_found(id: UserId) -> Error {
    Error::NotFound(format!("User {} not found", id))
}

/// List all users
///
/// An empty table is `[]`.
#[instrument(skip_all)]
pub async fn list_users<R: UserRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<User>>> {
    let users = state.users().list().await?;
    debug!("Listed {} users", users.len());
    Ok(Json(users))
}

/// Get a user by ID
#[instrument(skip_all)]
pub async fn get_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    id: IdParam,
) -> Result<Json<User>> {
    let Path(id) = id?;

    state
        .users()
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Create a new user
#[instrument(skip_all)]
pub async fn create_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    payload: Body,
) -> Result<&'static str> {
    let Json(payload) = payload?;

    let user = state.users().create(payload).await?;
    info!(id = user.id, "Created user");

    Ok(USER_CREATED)
}

/// Replace a user's name and email
#[instrument(skip_all)]
pub async fn update_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    id: IdParam,
    payload: Body,
) -> Result<&'static str> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    if !state.users().update(id, payload).await? {
        return Err(not_found(id));
    }
    info!(id, "Updated user");

    Ok(USER_UPDATED)
}

/// Delete a user
///
/// Succeeds whether or not the row existed.
#[instrument(skip_all)]
pub async fn delete_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    id: IdParam,
) -> Result<&'static str> {
    let Path(id) = id?;

    if state.users().delete(id).await? {
        info!(id, "Deleted user");
    } else {
        debug!(id, "Delete matched no user");
    }

    Ok(USER_DELETED)
}
