//! Built-in blog schema.

use super::{ColumnSpec, ColumnType, DefaultValue, Schema, SqlFn, TableSpec, TextKind};

fn timestamp() -> ColumnSpec {
    ColumnSpec::new(ColumnType::DateTime).default_to(DefaultValue::Fn { func: SqlFn::Now })
}

fn foreign_key(target: &str) -> ColumnSpec {
    ColumnSpec::new(ColumnType::Integer)
        .unsigned()
        .references(target)
}

impl Schema {
    /// Tables backing the blog API: `users`, `categories`, `tags`, `posts`
    /// and the `posts_tags` join table.
    pub fn blog() -> Self {
        Schema::new()
            .table(
                "users",
                TableSpec::new()
                    .column("id", ColumnSpec::new(ColumnType::Increments).primary())
                    .column("name", ColumnSpec::new(ColumnType::String).maxlength(150))
                    .column(
                        "email",
                        ColumnSpec::new(ColumnType::String).maxlength(254).unique(),
                    )
                    .column("created_at", timestamp())
                    .column("updated_at", timestamp()),
            )
            .table(
                "categories",
                TableSpec::new()
                    .column("id", ColumnSpec::new(ColumnType::Increments).primary())
                    .column(
                        "name",
                        ColumnSpec::new(ColumnType::String).maxlength(150).unique(),
                    )
                    .column("created_at", timestamp())
                    .column("updated_at", timestamp()),
            )
            .table(
                "tags",
                TableSpec::new()
                    .column("id", ColumnSpec::new(ColumnType::Increments).primary())
                    .column(
                        "name",
                        ColumnSpec::new(ColumnType::String).maxlength(150).unique(),
                    ),
            )
            .table(
                "posts",
                TableSpec::new()
                    .column("id", ColumnSpec::new(ColumnType::Increments).primary())
                    .column(
                        "title",
                        ColumnSpec::new(ColumnType::String).maxlength(150).nullable(),
                    )
                    .column(
                        "body",
                        ColumnSpec::new(ColumnType::Text)
                            .fieldtype(TextKind::Mediumtext)
                            .nullable(),
                    )
                    .column("category_id", foreign_key("categories.id"))
                    .column("author_id", foreign_key("users.id"))
                    .column("created_at", timestamp())
                    .column("updated_at", timestamp()),
            )
            .table(
                "posts_tags",
                TableSpec::new()
                    .column("id", ColumnSpec::new(ColumnType::Increments).primary())
                    .column("post_id", foreign_key("posts.id"))
                    .column("tag_id", foreign_key("tags.id")),
            )
    }
}
