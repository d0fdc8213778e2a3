//! Handlers for affiliate link management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::affiliate_link::{
    AffiliateLinkResponse, CreateAffiliateLinkRequest, LinkActivityResponse,
    UpdateAffiliateLinkRequest,
};
use crate::domain::entities::AffiliateLinkPatch;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all affiliate links, newest first.
///
/// # Endpoint
///
/// `GET /api/admin/affiliates`
pub async fn list_affiliate_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AffiliateLinkResponse>>, AppError> {
    let links = state.affiliate_links.list().await?;

    Ok(Json(
        links.into_iter().map(AffiliateLinkResponse::from).collect(),
    ))
}

/// Creates an affiliate link.
///
/// # Endpoint
///
/// `POST /api/admin/affiliates`
///
/// The slug is derived from the name; a collision with an existing slug is
/// disambiguated with a short random suffix.
///
/// # Errors
///
/// Returns 400 Bad Request when name or URL is missing.
pub async fn create_affiliate_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateAffiliateLinkRequest>,
) -> Result<Json<AffiliateLinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .affiliate_links
        .create(payload.name, payload.original_url, payload.guide_reference)
        .await?;

    Ok(Json(link.into()))
}

/// Fetches one link together with its recent ledger activity.
///
/// # Endpoint
///
/// `GET /api/admin/affiliates/{id}`
pub async fn link_activity_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<LinkActivityResponse>, AppError> {
    let activity = state.affiliate_links.activity(id).await?;

    Ok(Json(activity.into()))
}

/// Partially updates a link. The slug never changes.
///
/// # Endpoint
///
/// `PUT /api/admin/affiliates/{id}`
///
/// # Errors
///
/// Returns 404 Not Found for an unknown id.
pub async fn update_affiliate_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateAffiliateLinkRequest>,
) -> Result<Json<AffiliateLinkResponse>, AppError> {
    payload.validate()?;

    let patch = AffiliateLinkPatch {
        name: payload.name,
        original_url: payload.original_url,
        guide_id: payload.guide_reference,
    };

    let link = state.affiliate_links.update(id, patch).await?;

    Ok(Json(link.into()))
}

/// Hard-deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/admin/affiliates/{id}`
///
/// Idempotent: deleting an absent id also returns 204. The click ledger
/// keeps the deleted link's history; its former slug starts redirecting
/// visitors to the home page.
pub async fn delete_affiliate_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.affiliate_links.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
