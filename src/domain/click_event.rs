//! In-flight click event for asynchronous tracking.

/// A click captured on the redirect path, awaiting persistence.
///
/// Carried from the redirect handler to the background worker over a
/// bounded channel. This decouples ledger writes and the counter increment
/// from the HTTP response: the redirect is issued as soon as the
/// destination is known, and a full queue simply drops the event.
///
/// Metadata is already normalized by the handler: the referrer defaults to
/// `"direct"`, the user agent to `"unknown"`, and the IP to the loopback
/// sentinel when the forwarding header is absent.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub link_id: i64,
    pub guide_id: Option<i64>,
    pub device: String,
    pub referrer: String,
    pub user_agent: String,
    pub ip_address: String,
}
