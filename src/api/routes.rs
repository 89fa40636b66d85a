//! Resource route configuration.

use crate::api::handlers::{
    create_category_handler, create_post_handler, create_user_handler, delete_category_handler,
    delete_post_handler, delete_user_handler, get_category_handler, get_post_handler,
    get_user_handler, list_categories_handler, list_posts_handler, list_tags_handler,
    list_users_handler, update_category_handler, update_post_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// CRUD routes for every resource.
///
/// # Endpoints
///
/// - `GET    /users`             - List users
/// - `POST   /users`             - Create a user
/// - `GET    /users/{id}`        - Fetch a user
/// - `PUT    /users/{id}`        - Update a user
/// - `DELETE /users/{id}`        - Delete a user
/// - same five for `/categories` and `/posts`
/// - `GET    /tags`              - List tags
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route(
            "/categories",
            get(list_categories_handler).post(create_category_handler),
        )
        .route(
            "/categories/{id}",
            get(get_category_handler)
                .put(update_category_handler)
                .delete(delete_category_handler),
        )
        .route("/posts", get(list_posts_handler).post(create_post_handler))
        .route(
            "/posts/{id}",
            get(get_post_handler)
                .put(update_post_handler)
                .delete(delete_post_handler),
        )
        .route("/tags", get(list_tags_handler))
}
