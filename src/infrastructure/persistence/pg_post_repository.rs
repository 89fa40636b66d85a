//! PostgreSQL implementation of the post repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use std::collections::HashMap;
use std::sync::Arc;

use super::pg_tag_repository::TagRow;
use crate::domain::entities::tag::normalize_tag_names;
use crate::domain::entities::{NewPost, Post, Tag, UpdatePost};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i32,
    title: Option<String>,
    body: Option<String>,
    category_id: i32,
    author_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self, tags: Vec<Tag>) -> Post {
        Post {
            id: self.id,
            title: self.title,
            body: self.body,
            category_id: self.category_id,
            author_id: self.author_id,
            tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostTagRow {
    post_id: i32,
    id: i32,
    name: String,
}

/// PostgreSQL repository for posts.
///
/// Writes touching the tag set run in one transaction: the post row, the
/// tag upserts and the `posts_tags` rows commit together.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Loads the tags of several posts in one query, keyed by post id.
    async fn tags_for(&self, post_ids: &[i32]) -> Result<HashMap<i32, Vec<Tag>>, AppError> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, PostTagRow>(
            r#"
            SELECT pt.post_id, t.id, t.name
            FROM posts_tags pt
            JOIN tags t ON t.id = pt.tag_id
            WHERE pt.post_id = ANY($1)
            ORDER BY t.name
            "#,
        )
        .bind(post_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut by_post: HashMap<i32, Vec<Tag>> = HashMap::new();
        for row in rows {
            by_post.entry(row.post_id).or_default().push(Tag {
                id: row.id,
                name: row.name,
            });
        }

        Ok(by_post)
    }

    /// Replaces the tag set of `post_id`, creating missing tags.
    async fn replace_tags(
        tx: &mut Transaction<'_, Postgres>,
        post_id: i32,
        names: &[String],
    ) -> Result<Vec<Tag>, AppError> {
        // Upsert in a fixed order so concurrent writers lock tag rows alike.
        let mut names = normalize_tag_names(names);
        names.sort();

        sqlx::query("DELETE FROM posts_tags WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut **tx)
            .await?;

        if names.is_empty() {
            return Ok(Vec::new());
        }

        // DO UPDATE instead of DO NOTHING so existing tags are returned too.
        let rows = sqlx::query_as::<_, TagRow>(
            r#"
            INSERT INTO tags (name)
            SELECT UNNEST($1::VARCHAR[])
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name
            "#,
        )
        .bind(&names)
        .fetch_all(&mut **tx)
        .await?;

        let tag_ids: Vec<i32> = rows.iter().map(|r| r.id).collect();

        sqlx::query(
            r#"
            INSERT INTO posts_tags (post_id, tag_id)
            SELECT $1, UNNEST($2::INTEGER[])
            "#,
        )
        .bind(post_id)
        .bind(&tag_ids)
        .execute(&mut **tx)
        .await?;

        let mut tags: Vec<Tag> = rows.into_iter().map(Tag::from).collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Post>, AppError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, body, category_id, author_id, created_at, updated_at
            FROM posts
            ORDER BY created_at DESC, id DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        let mut tags = self.tags_for(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let post_tags = tags.remove(&r.id).unwrap_or_default();
                r.into_post(post_tags)
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, body, category_id, author_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let tags = self.tags_for(&[row.id]).await?.remove(&row.id);
        Ok(Some(row.into_post(tags.unwrap_or_default())))
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title, body, category_id, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, body, category_id, author_id, created_at, updated_at
            "#,
        )
        .bind(new_post.title)
        .bind(new_post.body)
        .bind(new_post.category_id)
        .bind(new_post.author_id)
        .fetch_one(&mut *tx)
        .await?;

        let tags = Self::replace_tags(&mut tx, row.id, &new_post.tags).await?;

        tx.commit().await?;
        Ok(row.into_post(tags))
    }

    async fn update(&self, id: i32, update: UpdatePost) -> Result<Option<Post>, AppError> {
        let set_title = update.title.is_some();
        let set_body = update.body.is_some();

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts SET
                title       = CASE WHEN $2 THEN $3::VARCHAR ELSE title END,
                body        = CASE WHEN $4 THEN $5::TEXT ELSE body END,
                category_id = COALESCE($6::INTEGER, category_id),
                author_id   = COALESCE($7::INTEGER, author_id),
                updated_at  = NOW()
            WHERE id = $1
            RETURNING id, title, body, category_id, author_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(set_title)
        .bind(update.title.flatten())
        .bind(set_body)
        .bind(update.body.flatten())
        .bind(update.category_id)
        .bind(update.author_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        let replaced = match &update.tags {
            Some(names) => Some(Self::replace_tags(&mut tx, row.id, names).await?),
            None => None,
        };

        tx.commit().await?;

        let tags = match replaced {
            Some(tags) => tags,
            None => self
                .tags_for(&[row.id])
                .await?
                .remove(&row.id)
                .unwrap_or_default(),
        };

        Ok(Some(row.into_post(tags)))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM posts_tags WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
