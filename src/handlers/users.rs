use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{debug, info, instrument};

use crate::dto::{UserDto, UserPayload};
use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created successfully", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid or duplicate user data", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), ApiError> {
    debug!("creating user");

    let user = state.users.create_user(payload).await?;

    info!("user created with id {}", user.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Created successfully", user)),
    ))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = ApiResponse<UserDto>),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    debug!("fetching user with id {}", id);

    let user = state.users.get_user(id).await?;

    Ok(Json(ApiResponse::success("Success", user)))
}

/// Get all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = ApiResponse<Vec<UserDto>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserDto>>>, ApiError> {
    debug!("fetching all users");

    let users = state.users.get_all_users().await?;
    let count = users.len();

    info!("retrieved {} users", count);
    Ok(Json(ApiResponse::success_with_count("Success", users, count)))
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = i32, Path, description = "User ID"),
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated successfully", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid or duplicate user data", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn update_user(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    debug!("updating user with id {}", id);

    let user = state.users.update_user(id, payload).await?;

    info!("user {} updated", id);
    Ok(Json(ApiResponse::success("Updated successfully", user)))
}

/// Delete a user by ID
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_user(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    debug!("deleting user with id {}", id);

    state.users.delete_user(id).await?;

    info!("user {} deleted", id);
    Ok(Json(ApiResponse::message_only("Deleted successfully")))
}
