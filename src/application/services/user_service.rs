//! User management service.

use crate::domain::entities::{NewUser, UpdateUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for the `/users` resource.
///
/// Names are trimmed and emails are trimmed and lower-cased before they
/// reach the repository, so uniqueness is case-insensitive.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list_users(&self, offset: i64, limit: i64) -> Result<Vec<User>, AppError> {
        self.repository.list(offset, limit).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn get_user(&self, id: i32) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank.
    /// Returns [`AppError::Conflict`] if the email is already registered.
    pub async fn create_user(&self, name: String, email: String) -> Result<User, AppError> {
        let new_user = NewUser {
            name: normalize_name(&name)?,
            email: normalize_email(&email),
        };

        self.repository.create(new_user).await
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if the new email is already registered.
    pub async fn update_user(&self, id: i32, update: UpdateUser) -> Result<User, AppError> {
        let update = UpdateUser {
            name: update.name.as_deref().map(normalize_name).transpose()?,
            email: update.email.as_deref().map(normalize_email),
        };

        self.repository
            .update(id, update)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if posts still reference the user.
    pub async fn delete_user(&self, id: i32) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::not_found("User not found", json!({ "id": id }))
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

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
