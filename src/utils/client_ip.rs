//! Client IP extraction from forwarding headers.

use axum::http::HeaderMap;

/// Sentinel recorded when no forwarding header is present.
pub const LOOPBACK: &str = "127.0.0.1";

/// Extracts the client IP from the `X-Forwarded-For` header.
///
/// Takes the first entry of the comma-separated list (the originating
/// client as reported by the outermost proxy). Best-effort: the value is
/// not verified against a trusted proxy chain. Falls back to [`LOOPBACK`]
/// when the header is missing or unreadable.
pub fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| LOOPBACK.to_string())
}
