//! Affiliate link management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{AffiliateLink, AffiliateLinkPatch, Click, NewAffiliateLink};
use crate::domain::repositories::{AffiliateLinkRepository, ClickRepository};
use crate::error::AppError;
use crate::utils::slug::{disambiguate, slugify};

/// Ledger entries shown on the admin link-activity view.
const ACTIVITY_LIMIT: i64 = 20;

/// A link with its ledger activity, for the admin detail view.
#[derive(Debug, Clone)]
pub struct LinkActivity {
    pub link: AffiliateLink,
    pub total_events: i64,
    pub recent_events: Vec<Click>,
}

/// Service for creating, editing, and resolving affiliate links.
///
/// Owns slug derivation: names become lowercase hyphenated slugs, and a
/// collision with an existing slug is disambiguated with a short random
/// suffix. The suffixed slug is not re-checked; the database unique index
/// catches the residual case.
pub struct AffiliateLinkService<A: AffiliateLinkRepository, C: ClickRepository> {
    links: Arc<A>,
    clicks: Arc<C>,
}

impl<A: AffiliateLinkRepository, C: ClickRepository> AffiliateLinkService<A, C> {
    /// Creates a new affiliate link service.
    pub fn new(links: Arc<A>, clicks: Arc<C>) -> Self {
        Self { links, clicks }
    }

    /// Creates a link from a display name and destination URL.
    ///
    /// The destination is stored as given — it is an untrusted external
    /// string, not normalized or fetched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if name or URL is empty.
    /// Returns [`AppError::Conflict`] on a residual slug collision.
    pub async fn create(
        &self,
        name: String,
        original_url: String,
        guide_id: Option<i64>,
    ) -> Result<AffiliateLink, AppError> {
        if name.trim().is_empty() || original_url.trim().is_empty() {
            return Err(AppError::bad_request("Name and URL are required", json!({})));
        }

        let candidate = slugify(&name);

        let slug = if candidate.is_empty()
            || self.links.find_by_slug(&candidate).await?.is_some()
        {
            disambiguate(&candidate)
        } else {
            candidate
        };

        self.links
            .create(NewAffiliateLink {
                name,
                slug,
                original_url,
                guide_id,
            })
            .await
    }

    /// Partially updates a link. The slug is never re-derived.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown id.
    pub async fn update(
        &self,
        id: i64,
        patch: AffiliateLinkPatch,
    ) -> Result<AffiliateLink, AppError> {
        self.links.update(id, patch).await
    }

    /// Hard-deletes a link. Idempotent. The ledger keeps the deleted
    /// link's click history.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.links.delete(id).await
    }

    /// Fetches a link together with its ledger activity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown id.
    pub async fn activity(&self, id: i64) -> Result<LinkActivity, AppError> {
        let link = self
            .links
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Affiliate link not found", json!({ "id": id })))?;

        let total_events = self.clicks.count_for_link(link.id).await?;
        let recent_events = self.clicks.recent_for_link(link.id, ACTIVITY_LIMIT).await?;

        Ok(LinkActivity {
            link,
            total_events,
            recent_events,
        })
    }

    /// Exact-match slug resolution for the public redirect path.
    ///
    /// Returns `Ok(None)` for unknown slugs; the caller decides how to
    /// degrade. Errors are surfaced so the redirect handler can soft-fail.
    pub async fn resolve(&self, slug: &str) -> Result<Option<AffiliateLink>, AppError> {
        self.links.find_by_slug(slug).await
    }

    /// All links, newest first.
    pub async fn list(&self) -> Result<Vec<AffiliateLink>, AppError> {
        self.links.list().await
    }
}
