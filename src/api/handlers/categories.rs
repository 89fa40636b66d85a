//! Handlers for the `/categories` resource.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::category::{CategoryItem, CreateCategoryRequest, UpdateCategoryRequest};
use crate::api::dto::pagination::{ListResponse, PaginationParams};
use crate::domain::entities::UpdateCategory;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// `GET /categories`
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of categories", body = ListResponse<CategoryItem>),
        (status = 400, description = "Invalid input", body = ErrorBody),
    )
)]
pub async fn list_categories_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ListResponse<CategoryItem>>, AppError> {
    let (offset, limit) = params.offset_limit()?;
    let categories = state
        .category_service
        .list_categories(offset, limit)
        .await?;

    Ok(Json(ListResponse::from_entities(categories)))
}

/// `GET /categories/{id}`
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = CategoryItem),
        (status = 404, description = "Category not found", body = ErrorBody),
    )
)]
pub async fn get_category_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<CategoryItem>, AppError> {
    let category = state.category_service.get_category(id).await?;
    Ok(Json(category.into()))
}

/// `POST /categories`
///
/// # Errors
///
/// Returns 409 if a category with the same name exists.
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryItem),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 409, description = "Name already used", body = ErrorBody),
    )
)]
pub async fn create_category_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryItem>), AppError> {
    payload.validate()?;

    let category = state.category_service.create_category(payload.name).await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// `PUT /categories/{id}`
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryItem),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 404, description = "Category not found", body = ErrorBody),
        (status = 409, description = "Name already used", body = ErrorBody),
    )
)]
pub async fn update_category_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<Json<CategoryItem>, AppError> {
    payload.validate()?;

    let update = UpdateCategory { name: payload.name };
    let category = state.category_service.update_category(id, update).await?;

    Ok(Json(category.into()))
}

/// `DELETE /categories/{id}`
///
/// # Errors
///
/// Returns 409 if posts still belong to the category.
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found", body = ErrorBody),
        (status = 409, description = "Category still has posts", body = ErrorBody),
    )
)]
pub async fn delete_category_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.category_service.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
