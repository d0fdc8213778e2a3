//! Guide entity: a product buying guide in draft or published state.

use chrono::{DateTime, Utc};

/// Publish state of a guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideStatus {
    Draft,
    Published,
}

impl GuideStatus {
    pub const DRAFT: &'static str = "draft";
    pub const PUBLISHED: &'static str = "published";

    pub fn as_str(&self) -> &'static str {
        match self {
            GuideStatus::Draft => Self::DRAFT,
            GuideStatus::Published => Self::PUBLISHED,
        }
    }

    /// Parses a status string, rejecting anything but the two known states.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            Self::DRAFT => Some(GuideStatus::Draft),
            Self::PUBLISHED => Some(GuideStatus::Published),
            _ => None,
        }
    }
}

/// A buying-guide article.
///
/// `category_name` and `author_name` are denormalized join results carried
/// for listing surfaces; they are not stored on the guide row itself.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Guide {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub category_id: i64,
    pub category_name: Option<String>,
    pub author_id: i64,
    pub author_name: Option<String>,
    pub status: String,
    pub featured: bool,
    pub publish_date: Option<DateTime<Utc>>,
    pub rating_score: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Guide {
    pub fn is_published(&self) -> bool {
        self.status == GuideStatus::PUBLISHED
    }
}

/// Input data for creating a new guide.
#[derive(Debug, Clone)]
pub struct NewGuide {
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub category_id: i64,
    pub author_id: i64,
    pub status: GuideStatus,
    pub featured: bool,
    pub publish_date: Option<DateTime<Utc>>,
    pub rating_score: Option<f64>,
    pub tag_ids: Vec<i64>,
}

/// Partial update for an existing guide.
///
/// `None` fields are left unchanged. Double-`Option` fields distinguish
/// "leave as is" (`None`) from "clear" (`Some(None)`). The slug is never
/// re-derived from a changed title.
#[derive(Debug, Clone, Default)]
pub struct GuidePatch {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<Option<String>>,
    pub category_id: Option<i64>,
    pub status: Option<GuideStatus>,
    pub featured: Option<bool>,
    pub publish_date: Option<Option<DateTime<Utc>>>,
    pub rating_score: Option<Option<f64>>,
    pub tag_ids: Option<Vec<i64>>,
}
