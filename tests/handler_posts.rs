mod common;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use axum_test::TestServer;
use blog_api::api::handlers::{
    create_post_handler, delete_post_handler, get_post_handler, list_posts_handler,
    list_tags_handler, update_post_handler,
};
use serde_json::{Value, json};
use sqlx::PgPool;

async fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool).await;
    let app = Router::new()
        .route("/posts", get(list_posts_handler))
        .route("/posts", post(create_post_handler))
        .route(
            "/posts/{id}",
            get(get_post_handler)
                .put(update_post_handler)
                .delete(delete_post_handler),
        )
        .route("/tags", get(list_tags_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

/// Seeds an author and a category, returning their ids.
async fn seed_refs(pool: &PgPool) -> (i32, i32) {
    let author = common::create_test_user(pool, "Ada", "ada@example.com").await;
    let category = common::create_test_category(pool, "Rust").await;
    (author, category)
}

fn tag_names(post: &Value) -> Vec<String> {
    post["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect()
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test(migrations = false)]
async fn test_create_post_with_tags(pool: PgPool) {
    let server = make_server(pool.clone()).await;
    let (author, category) = seed_refs(&pool).await;

    let response = server
        .post("/posts")
        .json(&json!({
            "title": "Hello",
            "body": "First post",
            "category_id": category,
            "author_id": author,
            "tags": ["Rust", "axum", "rust"]
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["title"], "Hello");
    assert_eq!(body["author_id"], author);
    assert_eq!(tag_names(&body), vec!["axum", "rust"]);
    assert_eq!(common::count_rows(&pool, "tags").await, 2);
    assert_eq!(common::count_rows(&pool, "posts_tags").await, 2);
}

#[sqlx::test(migrations = false)]
async fn test_create_post_without_title_or_body(pool: PgPool) {
    let server = make_server(pool.clone()).await;
    let (author, category) = seed_refs(&pool).await;

    let response = server
        .post("/posts")
        .json(&json!({ "category_id": category, "author_id": author }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert!(body["title"].is_null());
    assert!(body["body"].is_null());
    assert!(body["tags"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = false)]
async fn test_create_post_unknown_author(pool: PgPool) {
    let server = make_server(pool.clone()).await;
    let category = common::create_test_category(&pool, "Rust").await;

    let response = server
        .post("/posts")
        .json(&json!({ "category_id": category, "author_id": 999, "tags": ["x"] }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    // The transaction rolled back, so the tag was not left behind.
    assert_eq!(common::count_rows(&pool, "tags").await, 0);
    assert_eq!(common::count_rows(&pool, "posts").await, 0);
}

#[sqlx::test(migrations = false)]
async fn test_create_post_reuses_existing_tags(pool: PgPool) {
    let server = make_server(pool.clone()).await;
    let (author, category) = seed_refs(&pool).await;

    for _ in 0..2 {
        server
            .post("/posts")
            .json(&json!({ "category_id": category, "author_id": author, "tags": ["rust"] }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    assert_eq!(common::count_rows(&pool, "tags").await, 1);
    assert_eq!(common::count_rows(&pool, "posts_tags").await, 2);
}

#[sqlx::test(migrations = false)]
async fn test_create_post_invalid_category_id(pool: PgPool) {
    let server = make_server(pool).await;

    let response = server
        .post("/posts")
        .json(&json!({ "category_id": 0, "author_id": 1 }))
        .await;

    response.assert_status_bad_request();
}

// ─── READ ────────────────────────────────────────────────────────────────────

#[sqlx::test(migrations = false)]
async fn test_get_post_includes_tags(pool: PgPool) {
    let server = make_server(pool.clone()).await;
    let (author, category) = seed_refs(&pool).await;

    let created = server
        .post("/posts")
        .json(&json!({ "category_id": category, "author_id": author, "tags": ["web"] }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server.get(&format!("/posts/{id}")).await;

    response.assert_status_ok();
    assert_eq!(tag_names(&response.json::<Value>()), vec!["web"]);
}

#[sqlx::test(migrations = false)]
async fn test_list_posts_newest_first(pool: PgPool) {
    let server = make_server(pool.clone()).await;
    let (author, category) = seed_refs(&pool).await;

    for title in ["first", "second"] {
        server
            .post("/posts")
            .json(&json!({ "title": title, "category_id": category, "author_id": author }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.get("/posts").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "second");
    assert_eq!(items[1]["title"], "first");
}

#[sqlx::test(migrations = false)]
async fn test_get_post_not_found(pool: PgPool) {
    let server = make_server(pool).await;

    server.get("/posts/999").await.assert_status_not_found();
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test(migrations = false)]
async fn test_update_post_replaces_tags_and_clears_title(pool: PgPool) {
    let server = make_server(pool.clone()).await;
    let (author, category) = seed_refs(&pool).await;

    let created = server
        .post("/posts")
        .json(&json!({
            "title": "Draft",
            "body": "Body",
            "category_id": category,
            "author_id": author,
            "tags": ["old"]
        }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/posts/{id}"))
        .json(&json!({ "title": null, "tags": ["new", "shiny"] }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert!(body["title"].is_null());
    assert_eq!(body["body"], "Body");
    assert_eq!(tag_names(&body), vec!["new", "shiny"]);
    assert_eq!(common::count_rows(&pool, "posts_tags").await, 2);
}

#[sqlx::test(migrations = false)]
async fn test_update_post_keeps_tags_when_absent(pool: PgPool) {
    let server = make_server(pool.clone()).await;
    let (author, category) = seed_refs(&pool).await;

    let created = server
        .post("/posts")
        .json(&json!({ "category_id": category, "author_id": author, "tags": ["keep"] }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/posts/{id}"))
        .json(&json!({ "body": "now with text" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["body"], "now with text");
    assert_eq!(tag_names(&body), vec!["keep"]);
}

#[sqlx::test(migrations = false)]
async fn test_update_post_not_found(pool: PgPool) {
    let server = make_server(pool).await;

    let response = server
        .put("/posts/999")
        .json(&json!({ "title": "x" }))
        .await;

    response.assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test(migrations = false)]
async fn test_delete_post_removes_links(pool: PgPool) {
    let server = make_server(pool.clone()).await;
    let (author, category) = seed_refs(&pool).await;

    let created = server
        .post("/posts")
        .json(&json!({ "category_id": category, "author_id": author, "tags": ["a", "b"] }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server.delete(&format!("/posts/{id}")).await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(common::count_rows(&pool, "posts").await, 0);
    assert_eq!(common::count_rows(&pool, "posts_tags").await, 0);
    // Tags themselves outlive the post.
    assert_eq!(common::count_rows(&pool, "tags").await, 2);
}

// ─── TAGS ────────────────────────────────────────────────────────────────────

#[sqlx::test(migrations = false)]
async fn test_list_tags(pool: PgPool) {
    let server = make_server(pool.clone()).await;
    let (author, category) = seed_refs(&pool).await;

    server
        .post("/posts")
        .json(&json!({ "category_id": category, "author_id": author, "tags": ["zig", "c"] }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/tags").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    let names: Vec<_> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["c", "zig"]);
}

#[sqlx::test(migrations = false)]
async fn test_create_post_tag_too_long_once_lowercased(pool: PgPool) {
    let server = make_server(pool.clone()).await;
    let (author, category) = seed_refs(&pool).await;

    let response = server
        .post("/posts")
        .json(&json!({
            "category_id": category,
            "author_id": author,
            "tags": ["İ".repeat(100)]
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(common::count_rows(&pool, "posts").await, 0);
}

#[sqlx::test(migrations = false)]
async fn test_update_post_rejects_nul_body(pool: PgPool) {
    let server = make_server(pool.clone()).await;
    let (author, category) = seed_refs(&pool).await;

    let created = server
        .post("/posts")
        .json(&json!({ "category_id": category, "author_id": author }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/posts/{id}"))
        .json(&json!({ "body": "a\u{0}b" }))
        .await;

    response.assert_status_bad_request();
}
