//! PostgreSQL implementation of the affiliate link repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{AffiliateLink, AffiliateLinkPatch, NewAffiliateLink};
use crate::domain::repositories::AffiliateLinkRepository;
use crate::error::AppError;

const LINK_COLUMNS: &str =
    "id, name, slug, original_url, guide_id, click_count, created_at, updated_at";

/// PostgreSQL repository for affiliate links.
pub struct PgAffiliateLinkRepository {
    pool: Arc<PgPool>,
}

impl PgAffiliateLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AffiliateLinkRepository for PgAffiliateLinkRepository {
    async fn create(&self, new_link: NewAffiliateLink) -> Result<AffiliateLink, AppError> {
        let link = sqlx::query_as::<_, AffiliateLink>(&format!(
            r#"
            INSERT INTO affiliate_links (name, slug, original_url, guide_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(&new_link.name)
        .bind(&new_link.slug)
        .bind(&new_link.original_url)
        .bind(new_link.guide_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<AffiliateLink>, AppError> {
        let link = sqlx::query_as::<_, AffiliateLink>(&format!(
            "SELECT {LINK_COLUMNS} FROM affiliate_links WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<AffiliateLink>, AppError> {
        let link = sqlx::query_as::<_, AffiliateLink>(&format!(
            "SELECT {LINK_COLUMNS} FROM affiliate_links WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn list(&self) -> Result<Vec<AffiliateLink>, AppError> {
        let links = sqlx::query_as::<_, AffiliateLink>(&format!(
            "SELECT {LINK_COLUMNS} FROM affiliate_links ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn update(
        &self,
        id: i64,
        patch: AffiliateLinkPatch,
    ) -> Result<AffiliateLink, AppError> {
        let link = sqlx::query_as::<_, AffiliateLink>(&format!(
            r#"
            UPDATE affiliate_links
            SET name = COALESCE($2, name),
                original_url = COALESCE($3, original_url),
                guide_id = CASE WHEN $4 THEN $5 ELSE guide_id END,
                updated_at = now()
            WHERE id = $1
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.original_url)
        .bind(patch.guide_id.is_some())
        .bind(patch.guide_id.flatten())
        .fetch_optional(self.pool.as_ref())
        .await?;

        link.ok_or_else(|| {
            AppError::not_found("Affiliate link not found", json!({ "id": id }))
        })
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM affiliate_links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn increment_clicks(&self, id: i64) -> Result<(), AppError> {
        // Single-statement increment: concurrent clicks on the same link
        // serialize inside the database, not in the application.
        sqlx::query(
            "UPDATE affiliate_links SET click_count = click_count + 1, updated_at = now() \
             WHERE id = $1",
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
