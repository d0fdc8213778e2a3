//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: all components healthy
/// - **503 Service Unavailable**: one or more components degraded
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let queue_check = check_click_queue(&state);

    let all_healthy = db_check.status == "ok" && queue_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            click_queue: queue_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Probes the database with a cheap aggregate query.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.stats.category_count().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: format!("Connected, {count} categories"),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: format!("Database check failed: {e}"),
        },
    }
}

/// Checks the click-tracking channel is open and reports headroom.
fn check_click_queue(state: &AppState) -> CheckStatus {
    if state.click_tx.is_closed() {
        CheckStatus {
            status: "error".to_string(),
            message: "Click worker channel closed".to_string(),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: format!(
                "Capacity: {}/{}",
                state.click_tx.capacity(),
                state.click_tx.max_capacity()
            ),
        }
    }
}
