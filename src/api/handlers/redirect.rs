//! Handler for the public affiliate redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::Redirect,
};
use metrics::counter;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;
use crate::utils::device::classify_device;

/// Soft-fail target for anything that cannot be resolved.
const HOME: &str = "/";

/// Fallback when the User-Agent header is missing or unreadable.
const UNKNOWN_UA: &str = "unknown";

/// Sentinel referrer meaning the link was opened directly.
const DIRECT_REFERRER: &str = "direct";

/// Resolves a deal slug and redirects to its destination.
///
/// # Endpoint
///
/// `GET /deal/{slug}` (public, no auth)
///
/// # Request Flow
///
/// 1. Look up the slug in the link registry
/// 2. Issue a 307 redirect to the stored destination (temporary, so admin
///    edits propagate immediately)
/// 3. Enqueue a click event on the bounded tracking channel
///
/// The response is sent as soon as the destination is known; tracking is
/// fire-and-forget and a full queue drops the event rather than delaying
/// the redirect.
///
/// # Degradation
///
/// This endpoint never surfaces an error to the visitor. An unknown or
/// deleted slug, an empty slug, or a persistence failure during resolution
/// all redirect to the home page — a shared affiliate URL should never
/// show a 404 or 500.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Redirect {
    if slug.trim().is_empty() {
        return Redirect::temporary(HOME);
    }

    let link = match state.affiliate_links.resolve(&slug).await {
        Ok(Some(link)) => link,
        Ok(None) => {
            debug!(slug, "Unknown deal slug, redirecting home");
            return Redirect::temporary(HOME);
        }
        Err(e) => {
            warn!(slug, error = %e, "Slug resolution failed, redirecting home");
            return Redirect::temporary(HOME);
        }
    };

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(UNKNOWN_UA);

    let referrer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DIRECT_REFERRER);

    let event = ClickEvent {
        link_id: link.id,
        guide_id: link.guide_id,
        device: classify_device(user_agent).as_str().to_string(),
        referrer: referrer.to_string(),
        user_agent: user_agent.to_string(),
        ip_address: client_ip(&headers),
    };

    // Non-blocking enqueue; the worker owns the ledger append and the
    // counter increment. A full queue loses the event, never the redirect.
    if state.click_tx.try_send(event).is_err() {
        counter!("clicks_dropped_total").increment(1);
        debug!(link_id = link.id, "Click queue full, event dropped");
    }

    Redirect::temporary(&link.original_url)
}
