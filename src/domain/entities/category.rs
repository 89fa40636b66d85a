//! Category entity.

use chrono::{DateTime, Utc};

/// A category grouping posts.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCategory {
    pub name: Option<String>,
}
