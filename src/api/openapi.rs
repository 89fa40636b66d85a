//! OpenAPI description of the blog API.

use utoipa::OpenApi;

use crate::api::dto::category::{CategoryItem, CreateCategoryRequest, UpdateCategoryRequest};
use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::api::dto::post::{CreatePostRequest, PostItem, UpdatePostRequest};
use crate::api::dto::tag::TagItem;
use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest, UserItem};
use crate::api::handlers;
use crate::error::{ErrorBody, ErrorInfo};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        description = "CRUD over users, categories and tagged posts.",
        license(name = "MIT")
    ),
    paths(
        handlers::health::health_handler,
        handlers::users::list_users_handler,
        handlers::users::get_user_handler,
        handlers::users::create_user_handler,
        handlers::users::update_user_handler,
        handlers::users::delete_user_handler,
        handlers::categories::list_categories_handler,
        handlers::categories::get_category_handler,
        handlers::categories::create_category_handler,
        handlers::categories::update_category_handler,
        handlers::categories::delete_category_handler,
        handlers::posts::list_posts_handler,
        handlers::posts::get_post_handler,
        handlers::posts::create_post_handler,
        handlers::posts::update_post_handler,
        handlers::posts::delete_post_handler,
        handlers::tags::list_tags_handler,
    ),
    components(schemas(
        CreateUserRequest,
        UpdateUserRequest,
        UserItem,
        CreateCategoryRequest,
        UpdateCategoryRequest,
        CategoryItem,
        CreatePostRequest,
        UpdatePostRequest,
        PostItem,
        TagItem,
        HealthResponse,
        HealthChecks,
        CheckStatus,
        ErrorBody,
        ErrorInfo,
    )),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "users", description = "Post authors"),
        (name = "categories", description = "Post categories"),
        (name = "posts", description = "Posts and their tags"),
        (name = "tags", description = "Tags attached to posts"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/docs/openapi.json"
    }
}
