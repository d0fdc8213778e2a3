//! DTOs for the dashboard stats endpoint.

use serde::Serialize;

use crate::application::services::DashboardStats;
use crate::domain::repositories::{CategoryGuideCount, GuideClicks};

use super::guide::GuideResponse;

/// The guide highlighted on the dashboard.
#[derive(Debug, Serialize)]
pub struct TopGuideDto {
    pub title: String,
    pub slug: String,
}

/// The category with the most published guides.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCategoryDto {
    pub name: String,
    pub slug: String,
    pub published_guides: i64,
}

/// One entry of the trending ranking.
#[derive(Debug, Serialize)]
pub struct TrendingGuideDto {
    pub title: String,
    pub slug: String,
    pub clicks: i64,
}

impl From<GuideClicks> for TrendingGuideDto {
    fn from(entry: GuideClicks) -> Self {
        Self {
            title: entry.title,
            slug: entry.slug,
            clicks: entry.clicks,
        }
    }
}

/// Response for `GET /api/admin/stats`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsResponse {
    pub total_guides: i64,
    pub published_guides: i64,
    pub draft_guides: i64,
    pub total_categories: i64,
    /// Sum of all affiliate link click counters.
    pub total_clicks: i64,
    pub top_guide: Option<TopGuideDto>,
    pub top_category: Option<TopCategoryDto>,
    pub trending: Vec<TrendingGuideDto>,
    pub recent_guides: Vec<GuideResponse>,
}

impl From<DashboardStats> for DashboardStatsResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_guides: stats.guides.total,
            published_guides: stats.guides.published,
            draft_guides: stats.guides.draft,
            total_categories: stats.total_categories,
            total_clicks: stats.total_clicks,
            top_guide: stats.top_guide.map(|g| TopGuideDto {
                title: g.title,
                slug: g.slug,
            }),
            top_category: stats.top_category.map(|c: CategoryGuideCount| TopCategoryDto {
                name: c.name,
                slug: c.slug,
                published_guides: c.published_guides,
            }),
            trending: stats.trending.into_iter().map(TrendingGuideDto::from).collect(),
            recent_guides: stats
                .recent_guides
                .into_iter()
                .map(GuideResponse::from)
                .collect(),
        }
    }
}
