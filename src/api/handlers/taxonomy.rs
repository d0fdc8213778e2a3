//! Handlers for category and tag endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::taxonomy::{
    CategoryResponse, CreateCategoryRequest, CreateTagRequest, TagResponse,
    UpdateCategoryRequest,
};
use crate::domain::entities::CategoryPatch;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/admin/categories`
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let categories = state.taxonomy.list_categories().await?;

    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

/// `POST /api/admin/categories`
pub async fn create_category_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    payload.validate()?;

    let category = state
        .taxonomy
        .create_category(payload.name, payload.description)
        .await?;

    Ok(Json(category.into()))
}

/// `PUT /api/admin/categories/{id}`
pub async fn update_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    payload.validate()?;

    let patch = CategoryPatch {
        name: payload.name,
        description: payload.description,
    };

    let category = state.taxonomy.update_category(id, patch).await?;

    Ok(Json(category.into()))
}

/// `DELETE /api/admin/categories/{id}`
///
/// Returns 409 Conflict while guides still reference the category.
pub async fn delete_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.taxonomy.delete_category(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/admin/tags`
pub async fn list_tags_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<TagResponse>>, AppError> {
    let tags = state.taxonomy.list_tags().await?;

    Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
}

/// `POST /api/admin/tags`
pub async fn create_tag_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateTagRequest>,
) -> Result<Json<TagResponse>, AppError> {
    payload.validate()?;

    let tag = state.taxonomy.create_tag(payload.name).await?;

    Ok(Json(tag.into()))
}

/// `DELETE /api/admin/tags/{id}`
pub async fn delete_tag_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.taxonomy.delete_tag(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
