//! Dashboard aggregate service.

use std::sync::Arc;

use crate::domain::entities::Guide;
use crate::domain::repositories::{
    CategoryGuideCount, GuideClicks, GuideStatusCounts, StatsRepository,
};
use crate::error::AppError;

/// How many guides feed the trending ranking and the recent list.
const DASHBOARD_LIMIT: i64 = 5;

/// The guide highlighted on the dashboard.
#[derive(Debug, Clone)]
pub struct TopGuide {
    pub title: String,
    pub slug: String,
}

/// One dashboard payload: content counts, click totals, trending ranking.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub guides: GuideStatusCounts,
    pub total_categories: i64,
    pub total_clicks: i64,
    pub top_guide: Option<TopGuide>,
    pub top_category: Option<CategoryGuideCount>,
    pub trending: Vec<GuideClicks>,
    pub recent_guides: Vec<Guide>,
}

/// Service assembling the admin dashboard aggregates.
pub struct StatsService<R: StatsRepository> {
    stats: Arc<R>,
}

impl<R: StatsRepository> StatsService<R> {
    /// Creates a new stats service.
    pub fn new(stats: Arc<R>) -> Self {
        Self { stats }
    }

    /// Total number of categories; doubles as a cheap database liveness
    /// probe for the health endpoint.
    pub async fn category_count(&self) -> Result<i64, AppError> {
        self.stats.category_count().await
    }

    /// Assembles the dashboard payload.
    ///
    /// The top guide is the most-clicked guide from the ledger; when no
    /// clicks are attributed to any guide yet, it falls back to the most
    /// recently updated guide so the dashboard never shows an empty slot
    /// while content exists.
    pub async fn dashboard(&self) -> Result<DashboardStats, AppError> {
        let guides = self.stats.guide_status_counts().await?;
        let total_categories = self.stats.category_count().await?;
        let total_clicks = self.stats.total_link_clicks().await?;
        let trending = self.stats.top_guides_by_clicks(DASHBOARD_LIMIT).await?;
        let top_category = self.stats.top_category().await?;
        let recent_guides = self.stats.recent_guides(DASHBOARD_LIMIT).await?;

        let top_guide = trending
            .first()
            .map(|g| TopGuide {
                title: g.title.clone(),
                slug: g.slug.clone(),
            })
            .or_else(|| {
                recent_guides.first().map(|g| TopGuide {
                    title: g.title.clone(),
                    slug: g.slug.clone(),
                })
            });

        Ok(DashboardStats {
            guides,
            total_categories,
            total_clicks,
            top_guide,
            top_category,
            trending,
            recent_guides,
        })
    }
}
