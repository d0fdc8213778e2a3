//! Repository trait for category data access.

use crate::domain::entities::{Category, CategoryPatch, NewCategory};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for content categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, AppError>;

    /// Lists all categories ordered by name.
    async fn list(&self) -> Result<Vec<Category>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no category matches `id`.
    async fn update(&self, id: i64, patch: CategoryPatch) -> Result<Category, AppError>;

    /// Hard-deletes a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when guides still reference the
    /// category (enforced by the database).
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
