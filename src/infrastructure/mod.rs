//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits declared by the domain layer.
//!
//! # Modules
//!
//! - [`database`] - Connection pool setup
//! - [`persistence`] - PostgreSQL repository implementations

pub mod database;
pub mod persistence;
