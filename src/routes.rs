//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`          - Service banner
//! - `GET /health`    - Database health check
//! - `GET /docs/openapi.json` - OpenAPI document
//! - `/users`, `/categories`, `/posts`, `/tags` - see [`crate::api::routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, index_handler, openapi_handler};
use crate::api::middleware::tracing;
use crate::api::openapi::ApiDoc;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route(ApiDoc::openapi_json_path(), get(openapi_handler))
        .merge(api::routes::resource_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
