//! Repository trait for posts.

use crate::domain::entities::{NewPost, Post, UpdatePost};
use crate::error::AppError;
use async_trait::async_trait;

/// Data access for the `posts` table and its `posts_tags` links.
///
/// Returned posts always carry their full tag set.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Lists posts, newest first.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Post>, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, AppError>;

    /// Inserts a post and links its tags, creating missing tags.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the category or author does not exist.
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError>;

    /// Applies a partial update. Returns `None` if the post does not exist.
    async fn update(&self, id: i32, update: UpdatePost) -> Result<Option<Post>, AppError>;

    /// Deletes a post and its tag links. Returns `false` if it did not exist.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}
