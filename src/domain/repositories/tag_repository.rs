//! Repository trait for tags.

use crate::domain::entities::Tag;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the `tags` table.
///
/// Tags are written only through [`super::PostRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Lists tags ordered by name.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Tag>, AppError>;
}
