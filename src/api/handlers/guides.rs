//! Handlers for guide endpoints: admin CRUD plus the public read surface.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::guide::{
    CreateGuideRequest, GuideListQuery, GuideResponse, UpdateGuideRequest,
};
use crate::api::middleware::session::CurrentUser;
use crate::application::services::GuideDraft;
use crate::domain::entities::{GuidePatch, GuideStatus};
use crate::error::AppError;
use crate::state::AppState;

fn parse_status(value: &str) -> Result<GuideStatus, AppError> {
    GuideStatus::parse(value).ok_or_else(|| {
        AppError::bad_request("Unknown status", json!({ "status": value }))
    })
}

/// Lists guides for the admin surface, any publish state.
///
/// # Endpoint
///
/// `GET /api/admin/guides?status=draft|published`
pub async fn admin_list_guides_handler(
    Query(query): Query<GuideListQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<GuideResponse>>, AppError> {
    let guides = state.guides.list(query.status.as_deref()).await?;

    Ok(Json(guides.into_iter().map(GuideResponse::from).collect()))
}

/// Creates a guide authored by the session user.
///
/// # Endpoint
///
/// `POST /api/admin/guides`
pub async fn create_guide_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<CreateGuideRequest>,
) -> Result<Json<GuideResponse>, AppError> {
    payload.validate()?;

    let status = match payload.status.as_deref() {
        Some(value) => parse_status(value)?,
        None => GuideStatus::Draft,
    };

    let draft = GuideDraft {
        title: payload.title,
        slug: payload.slug,
        summary: payload.summary,
        content: payload.content,
        featured_image: payload.featured_image,
        category_id: payload.category_id,
        status,
        featured: payload.featured,
        publish_date: payload.publish_date,
        rating_score: payload.rating_score,
        tag_ids: payload.tag_ids,
    };

    let guide = state.guides.create(user.id, draft).await?;
    let tags = state.guides.tags(guide.id).await?;

    Ok(Json(GuideResponse::with_tags(guide, tags)))
}

/// Fetches one guide (any publish state) with its tags.
///
/// # Endpoint
///
/// `GET /api/admin/guides/{id}`
pub async fn get_guide_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<GuideResponse>, AppError> {
    let guide = state.guides.get(id).await?;
    let tags = state.guides.tags(guide.id).await?;

    Ok(Json(GuideResponse::with_tags(guide, tags)))
}

/// Partially updates a guide. The slug never changes.
///
/// # Endpoint
///
/// `PUT /api/admin/guides/{id}`
pub async fn update_guide_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateGuideRequest>,
) -> Result<Json<GuideResponse>, AppError> {
    payload.validate()?;

    let status = match payload.status.as_deref() {
        Some(value) => Some(parse_status(value)?),
        None => None,
    };

    let patch = GuidePatch {
        title: payload.title,
        summary: payload.summary,
        content: payload.content,
        featured_image: payload.featured_image,
        category_id: payload.category_id,
        status,
        featured: payload.featured,
        publish_date: payload.publish_date,
        rating_score: payload.rating_score,
        tag_ids: payload.tag_ids,
    };

    let guide = state.guides.update(id, patch).await?;
    let tags = state.guides.tags(guide.id).await?;

    Ok(Json(GuideResponse::with_tags(guide, tags)))
}

/// Hard-deletes a guide.
///
/// # Endpoint
///
/// `DELETE /api/admin/guides/{id}`
pub async fn delete_guide_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.guides.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Lists published guides for the rendering frontend.
///
/// # Endpoint
///
/// `GET /api/guides` (public)
pub async fn list_published_guides_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<GuideResponse>>, AppError> {
    let guides = state.guides.list(Some(GuideStatus::PUBLISHED)).await?;

    Ok(Json(guides.into_iter().map(GuideResponse::from).collect()))
}

/// Fetches one published guide by slug, with tags.
///
/// # Endpoint
///
/// `GET /api/guides/{slug}` (public)
pub async fn published_guide_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<GuideResponse>, AppError> {
    let guide = state.guides.get_published(&slug).await?;
    let tags = state.guides.tags(guide.id).await?;

    Ok(Json(GuideResponse::with_tags(guide, tags)))
}
