//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - `users`
//! - [`PgCategoryRepository`] - `categories`
//! - [`PgPostRepository`] - `posts` and `posts_tags`
//! - [`PgTagRepository`] - `tags`

pub mod pg_category_repository;
pub mod pg_post_repository;
pub mod pg_tag_repository;
pub mod pg_user_repository;

pub use pg_category_repository::PgCategoryRepository;
pub use pg_post_repository::PgPostRepository;
pub use pg_tag_repository::PgTagRepository;
pub use pg_user_repository::PgUserRepository;
