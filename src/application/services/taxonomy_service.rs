//! Category and tag management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Category, CategoryPatch, NewCategory, NewTag, Tag};
use crate::domain::repositories::{CategoryRepository, TagRepository};
use crate::error::AppError;
use crate::utils::slug::{disambiguate, slugify};

/// Service for the content taxonomy: categories and tags.
///
/// Slug handling matches the other slug-bearing entities: derived from the
/// name, disambiguated once on collision.
pub struct TaxonomyService<C: CategoryRepository, T: TagRepository> {
    categories: Arc<C>,
    tags: Arc<T>,
}

impl<C: CategoryRepository, T: TagRepository> TaxonomyService<C, T> {
    /// Creates a new taxonomy service.
    pub fn new(categories: Arc<C>, tags: Arc<T>) -> Self {
        Self { categories, tags }
    }

    pub async fn create_category(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<Category, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::bad_request("Name is required", json!({})));
        }

        let candidate = slugify(&name);

        let slug = if candidate.is_empty()
            || self.categories.find_by_slug(&candidate).await?.is_some()
        {
            disambiguate(&candidate)
        } else {
            candidate
        };

        self.categories
            .create(NewCategory {
                name,
                slug,
                description,
            })
            .await
    }

    pub async fn update_category(
        &self,
        id: i64,
        patch: CategoryPatch,
    ) -> Result<Category, AppError> {
        self.categories.update(id, patch).await
    }

    /// Hard-deletes a category. Fails with a conflict while guides still
    /// reference it.
    pub async fn delete_category(&self, id: i64) -> Result<(), AppError> {
        self.categories.delete(id).await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.categories.list().await
    }

    pub async fn create_tag(&self, name: String) -> Result<Tag, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::bad_request("Name is required", json!({})));
        }

        let candidate = slugify(&name);

        let slug = if candidate.is_empty()
            || self.tags.find_by_slug(&candidate).await?.is_some()
        {
            disambiguate(&candidate)
        } else {
            candidate
        };

        self.tags.create(NewTag { name, slug }).await
    }

    pub async fn delete_tag(&self, id: i64) -> Result<(), AppError> {
        self.tags.delete(id).await
    }

    pub async fn list_tags(&self) -> Result<Vec<Tag>, AppError> {
        self.tags.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockCategoryRepository, MockTagRepository};
    use chrono::Utc;

    fn stored_category(id: i64, name: &str, slug: &str) -> Category {
        let now = Utc::now();
        Category {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_category_derives_slug() {
        let mut categories = MockCategoryRepository::new();
        let tags = MockTagRepository::new();

        categories
            .expect_find_by_slug()
            .withf(|slug| slug == "home-office")
            .times(1)
            .returning(|_| Ok(None));

        categories
            .expect_create()
            .withf(|c| c.slug == "home-office")
            .times(1)
            .returning(|c| Ok(stored_category(1, &c.name, &c.slug)));

        let service = TaxonomyService::new(Arc::new(categories), Arc::new(tags));

        let category = service
            .create_category("Home Office".to_string(), None)
            .await
            .unwrap();

        assert_eq!(category.slug, "home-office");
    }

    #[tokio::test]
    async fn test_create_category_collision_gets_suffix() {
        let mut categories = MockCategoryRepository::new();
        let tags = MockTagRepository::new();

        categories
            .expect_find_by_slug()
            .times(1)
            .returning(|slug| Ok(Some(stored_category(1, "Existing", slug))));

        categories
            .expect_create()
            .withf(|c| c.slug.starts_with("audio-"))
            .times(1)
            .returning(|c| Ok(stored_category(2, &c.name, &c.slug)));

        let service = TaxonomyService::new(Arc::new(categories), Arc::new(tags));

        let category = service
            .create_category("Audio".to_string(), None)
            .await
            .unwrap();

        assert_ne!(category.slug, "audio");
    }

    #[tokio::test]
    async fn test_create_tag_rejects_empty_name() {
        let categories = MockCategoryRepository::new();
        let tags = MockTagRepository::new();

        let service = TaxonomyService::new(Arc::new(categories), Arc::new(tags));

        let result = service.create_tag("  ".to_string()).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }
}
