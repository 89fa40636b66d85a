//! Repository trait definitions for the domain layer.
//!
//! Each trait is the data access contract for one table. Implementations
//! live in `crate::infrastructure::persistence`; `mockall` generates mocks
//! for service unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - `users` CRUD
//! - [`CategoryRepository`] - `categories` CRUD
//! - [`PostRepository`] - `posts` CRUD including the tag set
//! - [`TagRepository`] - `tags` listing

pub mod category_repository;
pub mod post_repository;
pub mod tag_repository;
pub mod user_repository;

pub use category_repository::CategoryRepository;
pub use post_repository::PostRepository;
pub use tag_repository::TagRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
