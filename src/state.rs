//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{CategoryService, PostService, TagService, UserService};
use crate::infrastructure::persistence::{
    PgCategoryRepository, PgPostRepository, PgTagRepository, PgUserRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub category_service: Arc<CategoryService<PgCategoryRepository>>,
    pub post_service: Arc<PostService<PgPostRepository>>,
    pub tag_service: Arc<TagService<PgTagRepository>>,
}

impl AppState {
    /// Wires the PostgreSQL repositories and services over one pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
        let category_repo = Arc::new(PgCategoryRepository::new(pool.clone()));
        let post_repo = Arc::new(PgPostRepository::new(pool.clone()));
        let tag_repo = Arc::new(PgTagRepository::new(pool.clone()));

        Self {
            pool,
            user_service: Arc::new(UserService::new(user_repo)),
            category_service: Arc::new(CategoryService::new(category_repo)),
            post_service: Arc::new(PostService::new(post_repo)),
            tag_service: Arc::new(TagService::new(tag_repo)),
        }
    }
}
