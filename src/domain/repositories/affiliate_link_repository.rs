//! Repository trait for affiliate link data access.

use crate::domain::entities::{AffiliateLink, AffiliateLinkPatch, NewAffiliateLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for affiliate links.
///
/// Covers the admin CRUD surface, slug resolution for the public redirect,
/// and the atomic click-counter increment used by the tracking worker.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAffiliateLinkRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AffiliateLinkRepository: Send + Sync {
    /// Creates a new affiliate link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug already exists (the
    /// residual case after suffix disambiguation).
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewAffiliateLink) -> Result<AffiliateLink, AppError>;

    /// Finds a link by its database id.
    async fn find_by_id(&self, id: i64) -> Result<Option<AffiliateLink>, AppError>;

    /// Exact-match slug lookup used by the public redirect path and by
    /// collision checks during slug derivation.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<AffiliateLink>, AppError>;

    /// Lists all links, newest first.
    async fn list(&self) -> Result<Vec<AffiliateLink>, AppError>;

    /// Partially updates a link.
    ///
    /// Only fields present in [`AffiliateLinkPatch`] are modified; the slug
    /// is never touched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches `id`.
    async fn update(&self, id: i64, patch: AffiliateLinkPatch)
    -> Result<AffiliateLink, AppError>;

    /// Hard-deletes a link. Idempotent: deleting an absent id succeeds.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Atomically increments the click counter by one.
    ///
    /// A single SQL statement; concurrent increments for the same link rely
    /// on the database's atomicity guarantee, not application locking.
    /// Incrementing an absent id is a no-op.
    async fn increment_clicks(&self, id: i64) -> Result<(), AppError>;
}
