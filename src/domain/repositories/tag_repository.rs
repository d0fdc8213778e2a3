//! Repository trait for tag data access.

use crate::domain::entities::{NewTag, Tag};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for content tags.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn create(&self, new_tag: NewTag) -> Result<Tag, AppError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, AppError>;

    /// Lists all tags ordered by name.
    async fn list(&self) -> Result<Vec<Tag>, AppError>;

    /// Hard-deletes a tag and its guide associations. Idempotent.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
