//! Repository trait for guide data access.

use crate::domain::entities::{Guide, GuidePatch, NewGuide, Tag};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for buying guides.
///
/// List and lookup results carry denormalized category/author names for
/// listing surfaces (see [`Guide`]).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuideRepository: Send + Sync {
    /// Creates a new guide and its tag associations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on a residual slug collision.
    async fn create(&self, new_guide: NewGuide) -> Result<Guide, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Guide>, AppError>;

    /// Slug lookup regardless of publish state; used for collision checks.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Guide>, AppError>;

    /// Slug lookup restricted to published guides; the public read path.
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Guide>, AppError>;

    /// Lists guides, most recently updated first, optionally filtered by
    /// publish state.
    async fn list<'a>(&self, status: Option<&'a str>) -> Result<Vec<Guide>, AppError>;

    /// Partially updates a guide. `tag_ids` in the patch replaces the full
    /// tag association set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no guide matches `id`.
    async fn update(&self, id: i64, patch: GuidePatch) -> Result<Guide, AppError>;

    /// Hard-deletes a guide. Idempotent.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Tags associated with one guide, ordered by name.
    async fn tags_for_guide(&self, guide_id: i64) -> Result<Vec<Tag>, AppError>;
}
