//! DTOs for the `/users` resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::dto::validation::reject_nul;
use crate::domain::entities::User;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(
        length(min = 1, max = 150, message = "Name must be 1-150 characters"),
        custom(function = "reject_nul")
    )]
    pub name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 254, message = "Email must be at most 254 characters"),
        custom(function = "reject_nul")
    )]
    pub email: String,
}

/// Request body for `PUT /users/{id}`. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(
        length(min = 1, max = 150, message = "Name must be 1-150 characters"),
        custom(function = "reject_nul")
    )]
    pub name: Option<String>,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 254, message = "Email must be at most 254 characters"),
        custom(function = "reject_nul")
    )]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserItem {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserItem {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
