//! HTTP request handlers for API endpoints.
//!
//! One module per resource; each handler maps to a single service call.

pub mod categories;
pub mod docs;
pub mod health;
pub mod index;
pub mod posts;
pub mod tags;
pub mod users;

pub use categories::{
    create_category_handler, delete_category_handler, get_category_handler,
    list_categories_handler, update_category_handler,
};
pub use docs::openapi_handler;
pub use health::health_handler;
pub use index::index_handler;
pub use posts::{
    create_post_handler, delete_post_handler, get_post_handler, list_posts_handler,
    update_post_handler,
};
pub use tags::list_tags_handler;
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
