//! Repository trait for categories.

use crate::domain::entities::{Category, NewCategory, UpdateCategory};
use crate::error::AppError;
use async_trait::async_trait;

/// Data access for the `categories` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Category>, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already taken.
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError>;

    async fn update(
        &self,
        id: i32,
        update: UpdateCategory,
    ) -> Result<Option<Category>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if posts still reference the category.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}
