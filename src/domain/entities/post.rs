//! Post entity.

use chrono::{DateTime, Utc};

use super::Tag;

/// A blog post with its tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub title: Option<String>,
    pub body: Option<String>,
    pub category_id: i32,
    pub author_id: i32,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a post.
///
/// `tags` holds tag names; missing tags are created on the fly.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category_id: i32,
    pub author_id: i32,
    pub tags: Vec<String>,
}

/// Partial update for a post.
///
/// `title` and `body` distinguish "leave unchanged" (`None`) from "clear"
/// (`Some(None)`). `tags: Some(..)` replaces the whole tag set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePost {
    pub title: Option<Option<String>>,
    pub body: Option<Option<String>>,
    pub category_id: Option<i32>,
    pub author_id: Option<i32>,
    pub tags: Option<Vec<String>>,
}
