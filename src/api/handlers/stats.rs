//! Handler for the admin dashboard stats endpoint.

use axum::{Json, extract::State};

use crate::api::dto::stats::DashboardStatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Assembles the dashboard aggregates in one response.
///
/// # Endpoint
///
/// `GET /api/admin/stats`
///
/// Covers content counts, the summed affiliate click counter, the trending
/// ranking from the click ledger, and the most recently updated guides.
pub async fn dashboard_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<DashboardStatsResponse>, AppError> {
    let stats = state.stats.dashboard().await?;

    Ok(Json(stats.into()))
}
