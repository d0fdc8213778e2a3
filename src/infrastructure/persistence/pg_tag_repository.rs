//! PostgreSQL implementation of the tag repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewTag, Tag};
use crate::domain::repositories::TagRepository;
use crate::error::AppError;

const TAG_COLUMNS: &str = "id, name, slug, created_at, updated_at";

/// PostgreSQL repository for content tags.
pub struct PgTagRepository {
    pool: Arc<PgPool>,
}

impl PgTagRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn create(&self, new_tag: NewTag) -> Result<Tag, AppError> {
        let tag = sqlx::query_as::<_, Tag>(&format!(
            "INSERT INTO tags (name, slug) VALUES ($1, $2) RETURNING {TAG_COLUMNS}"
        ))
        .bind(&new_tag.name)
        .bind(&new_tag.slug)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(tag)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, AppError> {
        let tag = sqlx::query_as::<_, Tag>(&format!(
            "SELECT {TAG_COLUMNS} FROM tags WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(tag)
    }

    async fn list(&self) -> Result<Vec<Tag>, AppError> {
        let tags =
            sqlx::query_as::<_, Tag>(&format!("SELECT {TAG_COLUMNS} FROM tags ORDER BY name"))
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(tags)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
