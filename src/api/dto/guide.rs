//! DTOs for guide endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use validator::Validate;

use crate::domain::entities::{Guide, Tag};

use super::taxonomy::TagResponse;

/// Request body for `POST /api/admin/guides`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuideRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    /// Explicit slug; derived from the title when absent.
    pub slug: Option<String>,

    #[validate(length(min = 1, message = "Summary is required"))]
    pub summary: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    pub featured_image: Option<String>,

    pub category_id: i64,

    /// `draft` (default) or `published`.
    pub status: Option<String>,

    #[serde(default)]
    pub featured: bool,

    pub publish_date: Option<DateTime<Utc>>,

    #[validate(range(min = 0.0, max = 10.0, message = "Rating must be between 0 and 10"))]
    pub rating_score: Option<f64>,

    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

/// Request body for `PUT /api/admin/guides/{id}`.
///
/// All fields optional. Double-`Option` fields distinguish "leave as is"
/// (absent) from "clear" (`null`).
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuideRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Summary must not be empty"))]
    pub summary: Option<String>,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub featured_image: Option<Option<String>>,

    pub category_id: Option<i64>,

    pub status: Option<String>,

    pub featured: Option<bool>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub publish_date: Option<Option<DateTime<Utc>>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub rating_score: Option<Option<f64>>,

    pub tag_ids: Option<Vec<i64>>,
}

/// Query parameters for guide listings.
#[derive(Debug, Default, Deserialize)]
pub struct GuideListQuery {
    pub status: Option<String>,
}

/// JSON representation of a guide.
///
/// `tags` is only populated on detail responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideResponse {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagResponse>>,
}

impl GuideResponse {
    pub fn with_tags(guide: Guide, tags: Vec<Tag>) -> Self {
        let mut response = Self::from(guide);
        response.tags = Some(tags.into_iter().map(TagResponse::from).collect());
        response
    }
}

impl From<Guide> for GuideResponse {
    fn from(guide: Guide) -> Self {
        Self {
            id: guide.id,
            title: guide.title,
            slug: guide.slug,
            summary: guide.summary,
            content: guide.content,
            featured_image: guide.featured_image,
            category_id: guide.category_id,
            category_name: guide.category_name,
            author_id: guide.author_id,
            author_name: guide.author_name,
            status: guide.status,
            featured: guide.featured,
            publish_date: guide.publish_date,
            rating_score: guide.rating_score,
            created_at: guide.created_at,
            updated_at: guide.updated_at,
            tags: None,
        }
    }
}
