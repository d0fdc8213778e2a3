//! Repository trait for dashboard aggregates and trending ranking.

use crate::domain::entities::Guide;
use crate::error::AppError;
use async_trait::async_trait;

/// Guide counts by publish state.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuideStatusCounts {
    pub total: i64,
    pub published: i64,
    pub draft: i64,
}

/// A guide ranked by the click events it drove.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GuideClicks {
    pub guide_id: i64,
    pub title: String,
    pub slug: String,
    pub clicks: i64,
}

/// A category ranked by its published guide count.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryGuideCount {
    pub category_id: i64,
    pub name: String,
    pub slug: String,
    pub published_guides: i64,
}

/// Repository interface for cross-entity aggregates.
///
/// These are read-only reporting queries over guides, categories, affiliate
/// links, and the click ledger.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Guide counts by publish state.
    async fn guide_status_counts(&self) -> Result<GuideStatusCounts, AppError>;

    /// Total number of categories.
    async fn category_count(&self) -> Result<i64, AppError>;

    /// Sum of all affiliate link click counters.
    async fn total_link_clicks(&self) -> Result<i64, AppError>;

    /// Guides ranked by ledger click events, most clicked first. Guides
    /// with no recorded clicks are omitted.
    async fn top_guides_by_clicks(&self, limit: i64) -> Result<Vec<GuideClicks>, AppError>;

    /// Category with the most published guides.
    async fn top_category(&self) -> Result<Option<CategoryGuideCount>, AppError>;

    /// Most recently updated guides.
    async fn recent_guides(&self, limit: i64) -> Result<Vec<Guide>, AppError>;
}
