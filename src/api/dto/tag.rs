//! DTOs for tags.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::entities::Tag;

#[derive(Debug, Serialize, ToSchema)]
pub struct TagItem {
    pub id: i32,
    pub name: String,
}

impl From<Tag> for TagItem {
    fn from(t: Tag) -> Self {
        Self {
            id: t.id,
            name: t.name,
        }
    }
}
