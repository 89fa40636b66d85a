//! # Blog API
//!
//! A minimal blog back-end built with Axum and PostgreSQL: CRUD over users,
//! categories and posts (with tags), plus a schema-driven table migrator.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Services over the repositories
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL pool and repositories
//! - **API Layer** ([`api`]) - Handlers, DTOs and routes
//! - **Schema** ([`schema`], [`migrator`]) - Declarative tables and their creation
//!
//! ## Quick Start
//!
//! ```bash
//! export BLOG_DB_HOST=localhost BLOG_DB_USER=blog BLOG_DB_PASSWORD=secret
//!
//! # Create the tables once
//! cargo run --bin blog-migrate -- up
//!
//! # Start the API
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! See [`config`] for the environment variables and their fallbacks.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod migrator;
pub mod routes;
pub mod schema;
pub mod server;
pub mod state;
pub mod telemetry;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CategoryService, PostService, TagService, UserService};
    pub use crate::domain::entities::{Category, Post, Tag, User};
    pub use crate::error::AppError;
    pub use crate::schema::Schema;
    pub use crate::state::AppState;
}
