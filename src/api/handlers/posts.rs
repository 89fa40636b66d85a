//! Handlers for the `/posts` resource.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::pagination::{ListResponse, PaginationParams};
use crate::api::dto::post::{CreatePostRequest, PostItem, UpdatePostRequest};
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Lists posts, newest first, with their tags.
///
/// # Endpoint
///
/// `GET /posts?page=1&page_size=25`
#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of posts", body = ListResponse<PostItem>),
        (status = 400, description = "Invalid input", body = ErrorBody),
    )
)]
pub async fn list_posts_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ListResponse<PostItem>>, AppError> {
    let (offset, limit) = params.offset_limit()?;
    let posts = state.post_service.list_posts(offset, limit).await?;

    Ok(Json(ListResponse::from_entities(posts)))
}

/// `GET /posts/{id}`
#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post found", body = PostItem),
        (status = 404, description = "Post not found", body = ErrorBody),
    )
)]
pub async fn get_post_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<PostItem>, AppError> {
    let post = state.post_service.get_post(id).await?;
    Ok(Json(post.into()))
}

/// Creates a post.
///
/// # Endpoint
///
/// `POST /posts`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Hello",            // optional
///   "body": "...",               // optional
///   "category_id": 1,
///   "author_id": 1,
///   "tags": ["rust", "axum"]     // optional, created when missing
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 409 if the category or author does not exist.
#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostItem),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 409, description = "Unknown category or author", body = ErrorBody),
    )
)]
pub async fn create_post_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostItem>), AppError> {
    payload.validate()?;

    let post = state.post_service.create_post(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// Partially updates a post.
///
/// # Endpoint
///
/// `PUT /posts/{id}`
///
/// `title: null` / `body: null` clear the field; `tags` replaces the tag set.
#[utoipa::path(
    put,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = i32, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = PostItem),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 404, description = "Post not found", body = ErrorBody),
        (status = 409, description = "Unknown category or author", body = ErrorBody),
    )
)]
pub async fn update_post_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<PostItem>, AppError> {
    payload.validate()?;

    let post = state.post_service.update_post(id, payload.into()).await?;

    Ok(Json(post.into()))
}

/// Deletes a post and its tag links.
///
/// # Endpoint
///
/// `DELETE /posts/{id}`
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 404, description = "Post not found", body = ErrorBody),
    )
)]
pub async fn delete_post_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.post_service.delete_post(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
