//! DTOs for affiliate link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use validator::Validate;

use crate::application::services::LinkActivity;
use crate::domain::entities::{AffiliateLink, Click};

/// Request body for `POST /api/admin/affiliates`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAffiliateLinkRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Destination URL. Stored as an untrusted external string.
    #[validate(length(min = 1, message = "URL is required"))]
    pub original_url: String,

    /// Optional guide this link belongs to.
    pub guide_reference: Option<i64>,
}

/// Request body for `PUT /api/admin/affiliates/{id}`.
///
/// All fields are optional — only provided fields are changed. The slug is
/// never re-derived from a changed name.
///
/// # `guideReference` semantics
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the guide reference
/// - **id** → set a new guide reference
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAffiliateLinkRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub original_url: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub guide_reference: Option<Option<i64>>,
}

/// JSON representation of an affiliate link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateLinkResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub original_url: String,
    pub guide_reference: Option<i64>,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AffiliateLink> for AffiliateLinkResponse {
    fn from(link: AffiliateLink) -> Self {
        Self {
            id: link.id,
            name: link.name,
            slug: link.slug,
            original_url: link.original_url,
            guide_reference: link.guide_id,
            click_count: link.click_count,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

/// JSON representation of one ledger entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickEventResponse {
    pub affiliate_link: i64,
    pub guide: Option<i64>,
    pub timestamp: DateTime<Utc>,
    pub device: Option<String>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

impl From<Click> for ClickEventResponse {
    fn from(click: Click) -> Self {
        Self {
            affiliate_link: click.link_id,
            guide: click.guide_id,
            timestamp: click.occurred_at,
            device: click.device,
            referrer: click.referrer,
            user_agent: click.user_agent,
            ip_address: click.ip_address,
        }
    }
}

/// Response for `GET /api/admin/affiliates/{id}`: the link plus its recent
/// ledger activity.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkActivityResponse {
    #[serde(flatten)]
    pub link: AffiliateLinkResponse,
    pub total_events: i64,
    pub recent_events: Vec<ClickEventResponse>,
}

impl From<LinkActivity> for LinkActivityResponse {
    fn from(activity: LinkActivity) -> Self {
        Self {
            link: activity.link.into(),
            total_events: activity.total_events,
            recent_events: activity
                .recent_events
                .into_iter()
                .map(ClickEventResponse::from)
                .collect(),
        }
    }
}
