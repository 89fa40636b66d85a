#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use blog_api::api::handlers::{health_handler, index_handler};
use blog_api::api::routes::resource_routes;
use blog_api::migrator;
use blog_api::routes::app_router;
use blog_api::schema::Schema;
use blog_api::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

/// Creates the built-in blog tables in the per-test database.
pub async fn apply_schema(pool: &PgPool) {
    migrator::create_tables(pool, &Schema::blog())
        .await
        .expect("blog schema applies cleanly");
}

pub async fn create_test_state(pool: PgPool) -> AppState {
    apply_schema(&pool).await;
    AppState::new(Arc::new(pool))
}

/// Every route of the application over a migrated database.
pub async fn make_server(pool: PgPool) -> TestServer {
    let state = create_test_state(pool).await;
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .merge(resource_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

/// The production router, middleware included.
///
/// Mounted as a fallback service so requests reach the path normalization
/// layer before any routing happens.
pub async fn make_app_server(pool: PgPool) -> TestServer {
    let state = create_test_state(pool).await;
    let app = Router::new().fallback_service(app_router(state));
    TestServer::new(app).unwrap()
}

pub async fn create_test_user(pool: &PgPool, name: &str, email: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_category(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO categories (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
