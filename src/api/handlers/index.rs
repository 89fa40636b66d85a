//! Root endpoint.

/// `GET /` banner.
pub async fn index_handler() -> &'static str {
    "index"
}
