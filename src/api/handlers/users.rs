//! Handlers for the `/users` resource.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::pagination::{ListResponse, PaginationParams};
use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest, UserItem};
use crate::domain::entities::UpdateUser;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Lists users.
///
/// # Endpoint
///
/// `GET /users?page=1&page_size=25`
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of users", body = ListResponse<UserItem>),
        (status = 400, description = "Invalid input", body = ErrorBody),
    )
)]
pub async fn list_users_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ListResponse<UserItem>>, AppError> {
    let (offset, limit) = params.offset_limit()?;
    let users = state.user_service.list_users(offset, limit).await?;

    Ok(Json(ListResponse::from_entities(users)))
}

/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserItem),
        (status = 404, description = "User not found", body = ErrorBody),
    )
)]
pub async fn get_user_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<UserItem>, AppError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user.into()))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Errors
///
/// Returns 400 if the name or email is invalid.
/// Returns 409 if the email is already registered.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserItem),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 409, description = "Email already registered", body = ErrorBody),
    )
)]
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserItem>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .create_user(payload.name, payload.email)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Updates a user. Absent fields are left unchanged.
///
/// # Endpoint
///
/// `PUT /users/{id}`
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserItem),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 409, description = "Email already registered", body = ErrorBody),
    )
)]
pub async fn update_user_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserItem>, AppError> {
    payload.validate()?;

    let update = UpdateUser {
        name: payload.name,
        email: payload.email,
    };
    let user = state.user_service.update_user(id, update).await?;

    Ok(Json(user.into()))
}

/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
/// Returns 409 if posts still reference the user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 409, description = "User still authors posts", body = ErrorBody),
    )
)]
pub async fn delete_user_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
