//! PostgreSQL implementation of the guide repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Guide, GuidePatch, NewGuide, Tag};
use crate::domain::repositories::GuideRepository;
use crate::error::AppError;

/// Joined projection carrying denormalized category/author names.
const GUIDE_SELECT: &str = r#"
    SELECT g.id, g.title, g.slug, g.summary, g.content, g.featured_image,
           g.category_id, c.name AS category_name,
           g.author_id, u.name AS author_name,
           g.status, g.featured, g.publish_date, g.rating_score,
           g.created_at, g.updated_at
    FROM guides g
    LEFT JOIN categories c ON c.id = g.category_id
    LEFT JOIN users u ON u.id = g.author_id
"#;

/// PostgreSQL repository for buying guides.
pub struct PgGuideRepository {
    pool: Arc<PgPool>,
}

impl PgGuideRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn fetch_joined(&self, id: i64) -> Result<Option<Guide>, AppError> {
        let guide = sqlx::query_as::<_, Guide>(&format!("{GUIDE_SELECT} WHERE g.id = $1"))
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(guide)
    }
}

#[async_trait]
impl GuideRepository for PgGuideRepository {
    async fn create(&self, new_guide: NewGuide) -> Result<Guide, AppError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO guides
                (title, slug, summary, content, featured_image, category_id, author_id,
                 status, featured, publish_date, rating_score)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&new_guide.title)
        .bind(&new_guide.slug)
        .bind(&new_guide.summary)
        .bind(&new_guide.content)
        .bind(&new_guide.featured_image)
        .bind(new_guide.category_id)
        .bind(new_guide.author_id)
        .bind(new_guide.status.as_str())
        .bind(new_guide.featured)
        .bind(new_guide.publish_date)
        .bind(new_guide.rating_score)
        .fetch_one(&mut *tx)
        .await?;

        if !new_guide.tag_ids.is_empty() {
            sqlx::query(
                "INSERT INTO guide_tags (guide_id, tag_id) \
                 SELECT $1, UNNEST($2::bigint[]) ON CONFLICT DO NOTHING",
            )
            .bind(id)
            .bind(&new_guide.tag_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        self.fetch_joined(id).await?.ok_or_else(|| {
            AppError::internal("Guide vanished after insert", json!({ "id": id }))
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Guide>, AppError> {
        self.fetch_joined(id).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Guide>, AppError> {
        let guide = sqlx::query_as::<_, Guide>(&format!("{GUIDE_SELECT} WHERE g.slug = $1"))
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(guide)
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Guide>, AppError> {
        let guide = sqlx::query_as::<_, Guide>(&format!(
            "{GUIDE_SELECT} WHERE g.slug = $1 AND g.status = 'published'"
        ))
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(guide)
    }

    async fn list<'a>(&self, status: Option<&'a str>) -> Result<Vec<Guide>, AppError> {
        let guides = sqlx::query_as::<_, Guide>(&format!(
            "{GUIDE_SELECT} WHERE ($1::text IS NULL OR g.status = $1) ORDER BY g.updated_at DESC"
        ))
        .bind(status)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(guides)
    }

    async fn update(&self, id: i64, patch: GuidePatch) -> Result<Guide, AppError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE guides
            SET title = COALESCE($2, title),
                summary = COALESCE($3, summary),
                content = COALESCE($4, content),
                featured_image = CASE WHEN $5 THEN $6 ELSE featured_image END,
                category_id = COALESCE($7, category_id),
                status = COALESCE($8, status),
                featured = COALESCE($9, featured),
                publish_date = CASE WHEN $10 THEN $11 ELSE publish_date END,
                rating_score = CASE WHEN $12 THEN $13 ELSE rating_score END,
                updated_at = now()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.summary)
        .bind(patch.content)
        .bind(patch.featured_image.is_some())
        .bind(patch.featured_image.flatten())
        .bind(patch.category_id)
        .bind(patch.status.map(|s| s.as_str()))
        .bind(patch.featured)
        .bind(patch.publish_date.is_some())
        .bind(patch.publish_date.flatten())
        .bind(patch.rating_score.is_some())
        .bind(patch.rating_score.flatten())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(updated) = updated else {
            return Err(AppError::not_found("Guide not found", json!({ "id": id })));
        };

        if let Some(tag_ids) = patch.tag_ids {
            sqlx::query("DELETE FROM guide_tags WHERE guide_id = $1")
                .bind(updated)
                .execute(&mut *tx)
                .await?;

            if !tag_ids.is_empty() {
                sqlx::query(
                    "INSERT INTO guide_tags (guide_id, tag_id) \
                     SELECT $1, UNNEST($2::bigint[]) ON CONFLICT DO NOTHING",
                )
                .bind(updated)
                .bind(&tag_ids)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        self.fetch_joined(updated).await?.ok_or_else(|| {
            AppError::internal("Guide vanished after update", json!({ "id": id }))
        })
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM guides WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn tags_for_guide(&self, guide_id: i64) -> Result<Vec<Tag>, AppError> {
        let tags = sqlx::query_as::<_, Tag>(
            r#"
            SELECT t.id, t.name, t.slug, t.created_at, t.updated_at
            FROM tags t
            JOIN guide_tags gt ON gt.tag_id = t.id
            WHERE gt.guide_id = $1
            ORDER BY t.name
            "#,
        )
        .bind(guide_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(tags)
    }
}
