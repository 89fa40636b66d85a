//! Post management service.

use crate::domain::entities::tag::normalize_tag_names;
use crate::domain::entities::{NewPost, Post, UpdatePost};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for the `/posts` resource.
///
/// Tag names are normalized (trimmed, lower-cased, de-duplicated) before
/// the repository links them. Blank titles and bodies are stored as `NULL`.
pub struct PostService<R: PostRepository> {
    repository: Arc<R>,
}

impl<R: PostRepository> PostService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list_posts(&self, offset: i64, limit: i64) -> Result<Vec<Post>, AppError> {
        self.repository.list(offset, limit).await
    }

    pub async fn get_post(&self, id: i32) -> Result<Post, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates a post with its tags.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the category or author does not exist.
    pub async fn create_post(&self, new_post: NewPost) -> Result<Post, AppError> {
        let new_post = NewPost {
            title: blank_to_none(new_post.title),
            body: blank_to_none(new_post.body),
            tags: normalize_tag_names(&new_post.tags),
            ..new_post
        };

        self.repository.create(new_post).await
    }

    /// Applies a partial update; `tags`, when present, replaces the tag set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    /// Returns [`AppError::Conflict`] if a new category or author does not exist.
    pub async fn update_post(&self, id: i32, update: UpdatePost) -> Result<Post, AppError> {
        let update = UpdatePost {
            title: update.title.map(blank_to_none),
            body: update.body.map(blank_to_none),
            tags: update.tags.map(normalize_tag_names),
            ..update
        };

        self.repository
            .update(id, update)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete_post(&self, id: i32) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::not_found("Post not found", json!({ "id": id }))
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
