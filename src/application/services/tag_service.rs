//! Tag listing service.

use crate::domain::entities::Tag;
use crate::domain::repositories::TagRepository;
use crate::error::AppError;
use std::sync::Arc;

pub struct TagService<R: TagRepository> {
    repository: Arc<R>,
}

impl<R: TagRepository> TagService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list_tags(&self, offset: i64, limit: i64) -> Result<Vec<Tag>, AppError> {
        self.repository.list(offset, limit).await
    }
}
