//! Handler for tag listing.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::pagination::{ListResponse, PaginationParams};
use crate::api::dto::tag::TagItem;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// `GET /tags`
#[utoipa::path(
    get,
    path = "/tags",
    tag = "tags",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of tags", body = ListResponse<TagItem>),
        (status = 400, description = "Invalid input", body = ErrorBody),
    )
)]
pub async fn list_tags_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ListResponse<TagItem>>, AppError> {
    let (offset, limit) = params.offset_limit()?;
    let tags = state.tag_service.list_tags(offset, limit).await?;

    Ok(Json(ListResponse::from_entities(tags)))
}
