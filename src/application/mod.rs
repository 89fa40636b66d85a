//! Application layer services.
//!
//! Services sit between HTTP handlers and repositories: they normalize
//! input, issue the repository call and turn missing rows into
//! [`crate::error::AppError::NotFound`].
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`]
//! - [`services::category_service::CategoryService`]
//! - [`services::post_service::PostService`]
//! - [`services::tag_service::TagService`]

pub mod services;
