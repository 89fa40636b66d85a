//! Domain layer containing blog entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Plain data structures for users, categories, posts and tags
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the database driver or on HTTP.
//! Repository traits are implemented in [`crate::infrastructure::persistence`]
//! and consumed by [`crate::application::services`].

pub mod entities;
pub mod repositories;
