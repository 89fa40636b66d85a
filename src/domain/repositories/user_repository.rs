//! Repository trait for users.

use crate::domain::entities::{NewUser, UpdateUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Data access for the `users` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists users ordered by id.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError>;

    /// Inserts a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already taken.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Applies a partial update. Returns `None` if the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new email is already taken.
    async fn update(&self, id: i32, update: UpdateUser) -> Result<Option<User>, AppError>;

    /// Deletes a user. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if posts still reference the user.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}
