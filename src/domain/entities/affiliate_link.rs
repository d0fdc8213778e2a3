//! Affiliate link entity: a slug-to-destination mapping with a click counter.

use chrono::{DateTime, Utc};

/// A monetized outbound link, resolved by its public slug.
///
/// The slug is globally unique and immutable once assigned except through
/// an explicit administrative edit. `click_count` only ever increases; it is
/// incremented once per successfully resolved redirect by a single atomic
/// statement in the persistence layer.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AffiliateLink {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub original_url: String,
    /// Guide this link was created for, if any. Carried onto every click
    /// event so content can be ranked by the clicks it drives.
    pub guide_id: Option<i64>,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AffiliateLink {
    /// Creates a new AffiliateLink instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        name: String,
        slug: String,
        original_url: String,
        guide_id: Option<i64>,
        click_count: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            slug,
            original_url,
            guide_id,
            click_count,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new affiliate link.
///
/// The slug is derived (and disambiguated) by the service before this
/// struct reaches the repository.
#[derive(Debug, Clone)]
pub struct NewAffiliateLink {
    pub name: String,
    pub slug: String,
    pub original_url: String,
    pub guide_id: Option<i64>,
}

/// Partial update for an existing affiliate link.
///
/// `None` fields are left unchanged. The slug is never re-derived from a
/// changed name. `guide_id: Some(None)` clears the guide reference;
/// `Some(Some(id))` sets it.
#[derive(Debug, Clone, Default)]
pub struct AffiliateLinkPatch {
    pub name: Option<String>,
    pub original_url: Option<String>,
    pub guide_id: Option<Option<i64>>,
}
