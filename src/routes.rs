//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /deal/{slug}`  - Affiliate redirect (public, unthrottled)
//! - `GET /health`       - Health check (public)
//! - `/api/auth/*`       - Login/register (public) and me/logout (session)
//! - `/api/guides*`      - Published content reads (public)
//! - `/api/admin/*`      - Admin CRUD + stats (session cookie required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging on everything
//! - **Rate limiting** - Token bucket on auth and admin surfaces; the
//!   redirect path is deliberately unthrottled
//! - **Session auth** - Cookie-validated session for admin and account
//!   routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{rate_limit, session, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let admin = api::routes::admin_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), session::layer))
        .layer(rate_limit::secure_layer());

    let account = api::routes::session_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), session::layer));

    let auth = api::routes::auth_routes()
        .merge(account)
        .layer(rate_limit::layer());

    let api_router = Router::new()
        .nest("/admin", admin)
        .nest("/auth", auth)
        .merge(api::routes::public_content_routes());

    let router = Router::new()
        .route("/deal/{slug}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
