//! User REST API handlers
//!
//! Each handler is a one-to-one translation of an HTTP verb into a gateway
//! operation: no retries, no local recovery, no shared state beyond the
//! injected pool.

use crate::{
    ApiError, ApiResult, CreateUserRequest, DeleteResponse, UpdateUserRequest, UserDto,
};

use crate::state::AppState;
use um_core::NewUser;
use um_db::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/users
///
/// List all users, in the store's natural order
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let repo = UserRepository::new(state.pool.clone());
    let users = repo.find_all().await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// POST /api/users
///
/// Create a new user. The gateway assigns the id and enforces email
/// uniqueness; a duplicate email surfaces as 400.
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .create(NewUser::new(req.name, req.email, req.password))
        .await?;

    log::info!("Created user {}", user.id);

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/users/:id
///
/// Retrieve a single user by id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserDto>> {
    // On this path a malformed id token is folded into not-found: callers
    // cannot tell it apart from an id that was never assigned.
    let user_id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound {
        message: "User not found".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(user.into()))
}

/// PUT /api/users/:id
///
/// Overwrite the record with any provided subset of fields and return the
/// record as it exists after the update.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserDto>> {
    // Unlike get/delete, a malformed id token is a validation failure
    // here (400). Deliberately asymmetric; see DESIGN.md.
    let user_id = Uuid::parse_str(&id)?;

    let repo = UserRepository::new(state.pool.clone());
    let mut user = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if let Some(name) = req.name {
        user.name = name;
    }
    if let Some(email) = req.email {
        user.email = email;
    }
    if let Some(password) = req.password {
        user.password = password;
    }

    repo.update(&user).await?;

    log::info!("Updated user {}", user.id);

    Ok(Json(user.into()))
}

/// DELETE /api/users/:id
///
/// Remove the record
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let user_id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound {
        message: "User not found".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let repo = UserRepository::new(state.pool.clone());
    let deleted = repo.delete(user_id).await?;
    if !deleted {
        return Err(ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted user {}", user_id);

    Ok(Json(DeleteResponse {
        message: "User deleted successfully".to_string(),
    }))
}
