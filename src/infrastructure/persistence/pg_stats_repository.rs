//! PostgreSQL implementation of the stats repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Guide;
use crate::domain::repositories::{
    CategoryGuideCount, GuideClicks, GuideStatusCounts, StatsRepository,
};
use crate::error::AppError;

/// PostgreSQL repository for dashboard aggregates.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn guide_status_counts(&self) -> Result<GuideStatusCounts, AppError> {
        let (total, published, draft) = sqlx::query_as::<_, (i64, i64, i64)>(
            r#"
            SELECT COUNT(*),
                   COUNT(*) FILTER (WHERE status = 'published'),
                   COUNT(*) FILTER (WHERE status = 'draft')
            FROM guides
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(GuideStatusCounts {
            total,
            published,
            draft,
        })
    }

    async fn category_count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn total_link_clicks(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(click_count), 0)::bigint FROM affiliate_links",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(total)
    }

    async fn top_guides_by_clicks(&self, limit: i64) -> Result<Vec<GuideClicks>, AppError> {
        let rows = sqlx::query_as::<_, GuideClicks>(
            r#"
            SELECT g.id AS guide_id, g.title, g.slug, COUNT(ce.id) AS clicks
            FROM click_events ce
            JOIN guides g ON g.id = ce.guide_id
            GROUP BY g.id, g.title, g.slug
            ORDER BY clicks DESC, g.id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn top_category(&self) -> Result<Option<CategoryGuideCount>, AppError> {
        let row = sqlx::query_as::<_, CategoryGuideCount>(
            r#"
            SELECT c.id AS category_id, c.name, c.slug, COUNT(g.id) AS published_guides
            FROM guides g
            JOIN categories c ON c.id = g.category_id
            WHERE g.status = 'published'
            GROUP BY c.id, c.name, c.slug
            ORDER BY published_guides DESC, c.id
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn recent_guides(&self, limit: i64) -> Result<Vec<Guide>, AppError> {
        let guides = sqlx::query_as::<_, Guide>(
            r#"
            SELECT g.id, g.title, g.slug, g.summary, g.content, g.featured_image,
                   g.category_id, c.name AS category_name,
                   g.author_id, u.name AS author_name,
                   g.status, g.featured, g.publish_date, g.rating_score,
                   g.created_at, g.updated_at
            FROM guides g
            LEFT JOIN categories c ON c.id = g.category_id
            LEFT JOIN users u ON u.id = g.author_id
            ORDER BY g.updated_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(guides)
    }
}
