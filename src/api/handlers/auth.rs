//! Handlers for authentication endpoints.

use axum::{
    Extension, Json,
    extract::State,
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::auth::{
    LoginRequest, RegisterRequest, RegisterResponse, SessionResponse, UserResponse,
};
use crate::api::middleware::session::{CurrentUser, SESSION_COOKIE, token_from_headers};
use crate::error::AppError;
use crate::state::AppState;

fn session_cookie(token: &str, max_age: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={max_age}")
}

/// Registers an admin account.
///
/// # Endpoint
///
/// `POST /api/auth/register` (public)
///
/// # Errors
///
/// Returns 403 Forbidden when a registration secret is configured and the
/// provided one does not match; 400 when the email is taken.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    payload.validate()?;

    let user = state
        .auth
        .register(
            payload.name,
            payload.email,
            payload.password,
            payload.secret.as_deref(),
        )
        .await?;

    Ok(Json(RegisterResponse {
        success: true,
        user_id: user.id,
    }))
}

/// Verifies credentials and opens a session.
///
/// # Endpoint
///
/// `POST /api/auth/login` (public)
///
/// On success the opaque session token is set as an `HttpOnly` cookie;
/// the body carries the user profile. Unknown email and wrong password
/// produce the same 401.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let (user, token) = state.auth.login(&payload.email, &payload.password).await?;

    let cookie = session_cookie(&token, state.auth.session_ttl_seconds());

    let body = Json(SessionResponse {
        success: true,
        user: UserResponse::from(user),
    });

    Ok(([(header::SET_COOKIE, cookie)], body).into_response())
}

/// Returns the authenticated user's profile.
///
/// # Endpoint
///
/// `GET /api/auth/me` (session required)
pub async fn me_handler(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<SessionResponse> {
    Json(SessionResponse {
        success: true,
        user: UserResponse::from(user),
    })
}

/// Revokes the current session and clears the cookie.
///
/// # Endpoint
///
/// `POST /api/auth/logout` (session required)
pub async fn logout_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if let Some(token) = token_from_headers(&headers) {
        state.auth.logout(&token).await?;
    }

    let cleared = session_cookie("", 0);

    Ok((
        [(header::SET_COOKIE, cleared)],
        Json(json!({ "success": true })),
    )
        .into_response())
}
