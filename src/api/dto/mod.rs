//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs derive `Deserialize` + `validator::Validate`; response DTOs
//! derive `Serialize` and convert from domain entities.

pub mod category;
pub mod health;
pub mod pagination;
pub mod post;
pub mod tag;
pub mod user;
pub mod validation;
