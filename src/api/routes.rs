//! API route configuration.

use crate::api::handlers::{
    admin_list_guides_handler, create_affiliate_link_handler, create_category_handler,
    create_guide_handler, create_tag_handler, dashboard_stats_handler,
    delete_affiliate_link_handler, delete_category_handler, delete_guide_handler,
    delete_tag_handler, get_guide_handler, link_activity_handler, list_affiliate_links_handler,
    list_categories_handler, list_published_guides_handler, list_tags_handler, login_handler,
    logout_handler, me_handler, published_guide_handler, register_handler,
    update_affiliate_link_handler, update_category_handler, update_guide_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Session-protected admin routes, mounted under `/api/admin`.
///
/// # Endpoints
///
/// - `GET/POST       /affiliates`        - List / create affiliate links
/// - `GET/PUT/DELETE /affiliates/{id}`   - Activity view / edit / hard delete
/// - `GET/POST       /guides`            - List (any status) / create
/// - `GET/PUT/DELETE /guides/{id}`       - Detail / edit / hard delete
/// - `GET/POST       /categories`        - List / create
/// - `PUT/DELETE     /categories/{id}`   - Edit / delete
/// - `GET/POST       /tags`              - List / create
/// - `DELETE         /tags/{id}`         - Delete
/// - `GET            /stats`             - Dashboard aggregates
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/affiliates",
            get(list_affiliate_links_handler).post(create_affiliate_link_handler),
        )
        .route(
            "/affiliates/{id}",
            get(link_activity_handler)
                .put(update_affiliate_link_handler)
                .delete(delete_affiliate_link_handler),
        )
        .route(
            "/guides",
            get(admin_list_guides_handler).post(create_guide_handler),
        )
        .route(
            "/guides/{id}",
            get(get_guide_handler)
                .put(update_guide_handler)
                .delete(delete_guide_handler),
        )
        .route(
            "/categories",
            get(list_categories_handler).post(create_category_handler),
        )
        .route(
            "/categories/{id}",
            put(update_category_handler).delete(delete_category_handler),
        )
        .route("/tags", get(list_tags_handler).post(create_tag_handler))
        .route("/tags/{id}", delete(delete_tag_handler))
        .route("/stats", get(dashboard_stats_handler))
}

/// Public authentication routes, mounted under `/api/auth`.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
}

/// Session-protected account routes, mounted under `/api/auth`.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(me_handler))
        .route("/logout", post(logout_handler))
}

/// Public content read surface, mounted under `/api`.
pub fn public_content_routes() -> Router<AppState> {
    Router::new()
        .route("/guides", get(list_published_guides_handler))
        .route("/guides/{slug}", get(published_guide_handler))
}
