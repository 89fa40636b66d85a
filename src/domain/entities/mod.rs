//! Core domain entities of the blog.
//!
//! Each entity has companion input types:
//! - `NewX` - fields supplied when creating a record
//! - `UpdateX` - partial update, `None` leaves a field unchanged
//!
//! # Entity Types
//!
//! - [`User`] - Post author
//! - [`Category`] - Post category
//! - [`Post`] - Blog post with its [`Tag`]s

pub mod category;
pub mod post;
pub mod tag;
pub mod user;

pub use category::{Category, NewCategory, UpdateCategory};
pub use post::{NewPost, Post, UpdatePost};
pub use tag::Tag;
pub use user::{NewUser, UpdateUser, User};
