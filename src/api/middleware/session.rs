//! Cookie-session authentication middleware for the admin API.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    http::header::COOKIE,
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::domain::entities::User;
use crate::{error::AppError, state::AppState};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// The authenticated user, inserted into request extensions by [`layer`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Extracts the raw session token from the `Cookie` header.
///
/// Handles multiple cookies by splitting on semicolons and picking the
/// `token` key; other cookies are ignored.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(SESSION_COOKIE), Some(value)) => Some(value.to_string()),
                    _ => None,
                }
            })
        })
}

/// Authenticates requests using the opaque session token cookie.
///
/// # Authentication Flow
///
/// 1. Extract the `token` cookie
/// 2. Validate its hash against stored sessions (expiry + revocation)
/// 3. Insert [`CurrentUser`] into request extensions
/// 4. Continue to the handler
///
/// # Errors
///
/// Returns `401 Unauthorized` as a JSON error body when the cookie is
/// missing or the session is invalid. This is a JSON API; there are no
/// login-page redirects.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = token_from_headers(req.headers()).ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            json!({"reason": "Missing session cookie"}),
        )
    })?;

    let user = st.auth.authenticate(&token).await?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extracts_token_cookie() {
        let headers = headers_with_cookie("token=abc123");
        assert_eq!(token_from_headers(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_extracts_among_multiple_cookies() {
        let headers = headers_with_cookie("theme=dark; token=abc123; lang=en");
        assert_eq!(token_from_headers(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_ignores_other_cookies() {
        let headers = headers_with_cookie("theme=dark; lang=en");
        assert!(token_from_headers(&headers).is_none());
    }

    #[test]
    fn test_missing_header() {
        assert!(token_from_headers(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_value_with_equals_sign_kept_whole() {
        let headers = headers_with_cookie("token=abc=def");
        assert_eq!(token_from_headers(&headers).as_deref(), Some("abc=def"));
    }
}
