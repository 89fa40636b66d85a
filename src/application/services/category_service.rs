//! Category management service.

use crate::domain::entities::{Category, NewCategory, UpdateCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for the `/categories` resource.
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list_categories(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Category>, AppError> {
        self.repository.list(offset, limit).await
    }

    pub async fn get_category(&self, id: i32) -> Result<Category, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank.
    /// Returns [`AppError::Conflict`] if the name is already used.
    pub async fn create_category(&self, name: String) -> Result<Category, AppError> {
        let name = normalize_name(&name)?;
        self.repository.create(NewCategory { name }).await
    }

    pub async fn update_category(
        &self,
        id: i32,
        update: UpdateCategory,
    ) -> Result<Category, AppError> {
        let update = UpdateCategory {
            name: update.name.as_deref().map(normalize_name).transpose()?,
        };

        self.repository
            .update(id, update)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Conflict`] if posts still belong to it.
    pub async fn delete_category(&self, id: i32) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::not_found("Category not found", json!({ "id": id }))
}

fn normalize_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request(
            "Name must not be blank",
            json!({ "field": "name" }),
        ));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCategoryRepository;
    use chrono::Utc;

    fn create_test_category(id: i32, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_category_trims_name() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_create()
            .withf(|c| c.name == "Rust")
            .times(1)
            .returning(|c| Ok(create_test_category(1, &c.name)));

        let service = CategoryService::new(Arc::new(mock_repo));

        let category = service.create_category(" Rust ".to_string()).await.unwrap();
        assert_eq!(category.name, "Rust");
    }

    #[tokio::test]
    async fn test_update_category_blank_name() {
        let mock_repo = MockCategoryRepository::new();
        let service = CategoryService::new(Arc::new(mock_repo));

        let update = UpdateCategory {
            name: Some("".to_string()),
        };
        let result = service.update_category(1, update).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_list_categories() {
        let mut mock_repo = MockCategoryRepository::new();

        let categories = vec![create_test_category(1, "a"), create_test_category(2, "b")];
        mock_repo
            .expect_list()
            .withf(|offset, limit| *offset == 0 && *limit == 25)
            .times(1)
            .returning(move |_, _| Ok(categories.clone()));

        let service = CategoryService::new(Arc::new(mock_repo));

        let list = service.list_categories(0, 25).await.unwrap();
        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_category_in_use() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| {
            Err(AppError::conflict(
                "Foreign key constraint violation",
                json!({"constraint": "posts_category_id_fkey"}),
            ))
        });

        let service = CategoryService::new(Arc::new(mock_repo));

        let result = service.delete_category(1).await;
        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_get_category_not_found() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = CategoryService::new(Arc::new(mock_repo));

        let result = service.get_category(5).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
