//! DTOs for the `/posts` resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::api::dto::tag::TagItem;
use crate::api::dto::validation::reject_nul;
use crate::domain::entities::{NewPost, Post, UpdatePost};

const MAX_TAG_LEN: usize = 150;

/// Checks tag names as they will be stored: trimmed and lower-cased.
///
/// Lower-casing can lengthen a name (`İ` becomes two code points), so the
/// limit applies to the normalized form.
fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    for tag in tags {
        reject_nul(tag)?;

        let stored = tag.trim().to_lowercase();
        if stored.is_empty() || stored.chars().count() > MAX_TAG_LEN {
            return Err(ValidationError::new("tag_length")
                .with_message("Tags must be 1-150 characters".into()));
        }
    }
    Ok(())
}

/// Request body for `POST /posts`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[validate(
        length(max = 150, message = "Title must be at most 150 characters"),
        custom(function = "reject_nul")
    )]
    pub title: Option<String>,

    #[validate(custom(function = "reject_nul"))]
    pub body: Option<String>,

    #[validate(range(min = 1, message = "category_id must be positive"))]
    pub category_id: i32,

    #[validate(range(min = 1, message = "author_id must be positive"))]
    pub author_id: i32,

    #[serde(default)]
    #[validate(
        length(max = 20, message = "At most 20 tags per post"),
        custom(function = "validate_tags")
    )]
    pub tags: Vec<String>,
}

impl From<CreatePostRequest> for NewPost {
    fn from(r: CreatePostRequest) -> Self {
        NewPost {
            title: r.title,
            body: r.body,
            category_id: r.category_id,
            author_id: r.author_id,
            tags: r.tags,
        }
    }
}

/// Request body for `PUT /posts/{id}`.
///
/// # `title` / `body` semantics
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear
/// - **String** → set
///
/// `tags`, when present, replaces the whole tag set (`[]` removes all tags).
#[serde_as]
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePostRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(
        length(max = 150, message = "Title must be at most 150 characters"),
        custom(function = "reject_nul")
    )]
    pub title: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(custom(function = "reject_nul"))]
    pub body: Option<Option<String>>,

    #[validate(range(min = 1, message = "category_id must be positive"))]
    pub category_id: Option<i32>,

    #[validate(range(min = 1, message = "author_id must be positive"))]
    pub author_id: Option<i32>,

    #[validate(
        length(max = 20, message = "At most 20 tags per post"),
        custom(function = "validate_tags")
    )]
    pub tags: Option<Vec<String>>,
}

impl From<UpdatePostRequest> for UpdatePost {
    fn from(r: UpdatePostRequest) -> Self {
        UpdatePost {
            title: r.title,
            body: r.body,
            category_id: r.category_id,
            author_id: r.author_id,
            tags: r.tags,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostItem {
    pub id: i32,
    pub title: Option<String>,
    pub body: Option<String>,
    pub category_id: i32,
    pub author_id: i32,
    pub tags: Vec<TagItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostItem {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            body: p.body,
            category_id: p.category_id,
            author_id: p.author_id,
            tags: p.tags.into_iter().map(TagItem::from).collect(),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
