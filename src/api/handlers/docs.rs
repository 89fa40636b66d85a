//! Generated API documentation.

use axum::Json;
use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiDocument;

use crate::api::openapi::ApiDoc;

/// `GET /docs/openapi.json`
pub async fn openapi_handler() -> Json<OpenApiDocument> {
    Json(ApiDoc::openapi())
}
