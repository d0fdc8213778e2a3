//! Guide authoring and retrieval service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{Guide, GuidePatch, GuideStatus, NewGuide, Tag};
use crate::domain::repositories::GuideRepository;
use crate::error::AppError;
use crate::utils::slug::{disambiguate, slugify};

/// Author-provided fields for a new guide. The slug may be supplied
/// explicitly; otherwise it is derived from the title. Either way a
/// collision is disambiguated with a random suffix.
#[derive(Debug, Clone)]
pub struct GuideDraft {
    pub title: String,
    pub slug: Option<String>,
    pub summary: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub category_id: i64,
    pub status: GuideStatus,
    pub featured: bool,
    pub publish_date: Option<DateTime<Utc>>,
    pub rating_score: Option<f64>,
    pub tag_ids: Vec<i64>,
}

/// Service for creating, editing, and reading buying guides.
pub struct GuideService<G: GuideRepository> {
    guides: Arc<G>,
}

impl<G: GuideRepository> GuideService<G> {
    /// Creates a new guide service.
    pub fn new(guides: Arc<G>) -> Self {
        Self { guides }
    }

    /// Creates a guide authored by `author_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if title, summary, or content is
    /// empty.
    pub async fn create(&self, author_id: i64, draft: GuideDraft) -> Result<Guide, AppError> {
        if draft.title.trim().is_empty()
            || draft.summary.trim().is_empty()
            || draft.content.trim().is_empty()
        {
            return Err(AppError::bad_request("Missing required fields", json!({})));
        }

        let candidate = match &draft.slug {
            Some(slug) => slugify(slug),
            None => slugify(&draft.title),
        };

        let slug = if candidate.is_empty()
            || self.guides.find_by_slug(&candidate).await?.is_some()
        {
            disambiguate(&candidate)
        } else {
            candidate
        };

        self.guides
            .create(NewGuide {
                title: draft.title,
                slug,
                summary: draft.summary,
                content: draft.content,
                featured_image: draft.featured_image,
                category_id: draft.category_id,
                author_id,
                status: draft.status,
                featured: draft.featured,
                publish_date: draft.publish_date,
                rating_score: draft.rating_score,
                tag_ids: draft.tag_ids,
            })
            .await
    }

    /// Partially updates a guide. The slug is never re-derived.
    pub async fn update(&self, id: i64, patch: GuidePatch) -> Result<Guide, AppError> {
        self.guides.update(id, patch).await
    }

    /// Hard-deletes a guide. Idempotent.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.guides.delete(id).await
    }

    /// Fetches a guide by id regardless of publish state.
    pub async fn get(&self, id: i64) -> Result<Guide, AppError> {
        self.guides
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Guide not found", json!({ "id": id })))
    }

    /// Fetches a published guide by slug; the public read path.
    pub async fn get_published(&self, slug: &str) -> Result<Guide, AppError> {
        self.guides
            .find_published_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Guide not found", json!({ "slug": slug })))
    }

    /// Lists guides, optionally filtered by publish state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unknown status filter.
    pub async fn list(&self, status: Option<&str>) -> Result<Vec<Guide>, AppError> {
        if let Some(value) = status
            && GuideStatus::parse(value).is_none()
        {
            return Err(AppError::bad_request(
                "Unknown status filter",
                json!({ "status": value }),
            ));
        }

        self.guides.list(status).await
    }

    /// Tags associated with one guide.
    pub async fn tags(&self, guide_id: i64) -> Result<Vec<Tag>, AppError> {
        self.guides.tags_for_guide(guide_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockGuideRepository;

    fn draft(title: &str, slug: Option<&str>) -> GuideDraft {
        GuideDraft {
            title: title.to_string(),
            slug: slug.map(|s| s.to_string()),
            summary: "Our picks".to_string(),
            content: "<p>...</p>".to_string(),
            featured_image: None,
            category_id: 1,
            status: GuideStatus::Draft,
            featured: false,
            publish_date: None,
            rating_score: None,
            tag_ids: vec![],
        }
    }

    fn stored_guide(id: i64, new_guide: &NewGuide) -> Guide {
        let now = Utc::now();
        Guide {
            id,
            title: new_guide.title.clone(),
            slug: new_guide.slug.clone(),
            summary: new_guide.summary.clone(),
            content: new_guide.content.clone(),
            featured_image: new_guide.featured_image.clone(),
            category_id: new_guide.category_id,
            category_name: None,
            author_id: new_guide.author_id,
            author_name: None,
            status: new_guide.status.as_str().to_string(),
            featured: new_guide.featured,
            publish_date: new_guide.publish_date,
            rating_score: new_guide.rating_score,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_derives_slug_from_title() {
        let mut repo = MockGuideRepository::new();

        repo.expect_find_by_slug()
            .withf(|slug| slug == "best-standing-desks-2026")
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_create()
            .withf(|new_guide| new_guide.slug == "best-standing-desks-2026" && new_guide.author_id == 3)
            .times(1)
            .returning(|new_guide| Ok(stored_guide(1, &new_guide)));

        let service = GuideService::new(Arc::new(repo));

        let guide = service
            .create(3, draft("Best Standing Desks 2026", None))
            .await
            .unwrap();

        assert_eq!(guide.slug, "best-standing-desks-2026");
    }

    #[tokio::test]
    async fn test_create_honors_explicit_slug() {
        let mut repo = MockGuideRepository::new();

        repo.expect_find_by_slug()
            .withf(|slug| slug == "desks")
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_create()
            .withf(|new_guide| new_guide.slug == "desks")
            .times(1)
            .returning(|new_guide| Ok(stored_guide(1, &new_guide)));

        let service = GuideService::new(Arc::new(repo));

        let guide = service
            .create(1, draft("Best Standing Desks", Some("Desks")))
            .await
            .unwrap();

        assert_eq!(guide.slug, "desks");
    }

    #[tokio::test]
    async fn test_create_disambiguates_on_collision() {
        let mut repo = MockGuideRepository::new();

        repo.expect_find_by_slug().times(1).returning(|slug| {
            let new_guide = NewGuide {
                title: "Existing".to_string(),
                slug: slug.to_string(),
                summary: "s".to_string(),
                content: "c".to_string(),
                featured_image: None,
                category_id: 1,
                author_id: 1,
                status: GuideStatus::Draft,
                featured: false,
                publish_date: None,
                rating_score: None,
                tag_ids: vec![],
            };
            Ok(Some(stored_guide(1, &new_guide)))
        });

        repo.expect_create()
            .withf(|new_guide| new_guide.slug.starts_with("best-standing-desks-"))
            .times(1)
            .returning(|new_guide| Ok(stored_guide(2, &new_guide)));

        let service = GuideService::new(Arc::new(repo));

        let guide = service
            .create(1, draft("Best Standing Desks", None))
            .await
            .unwrap();

        assert_ne!(guide.slug, "best-standing-desks");
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields() {
        let repo = MockGuideRepository::new();
        let service = GuideService::new(Arc::new(repo));

        let mut empty_title = draft("", None);
        empty_title.title = "".to_string();

        let result = service.create(1, empty_title).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_status() {
        let repo = MockGuideRepository::new();
        let service = GuideService::new(Arc::new(repo));

        let result = service.list(Some("archived")).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_get_published_missing_is_not_found() {
        let mut repo = MockGuideRepository::new();
        repo.expect_find_published_by_slug()
            .times(1)
            .returning(|_| Ok(None));

        let service = GuideService::new(Arc::new(repo));

        let result = service.get_published("nope").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
