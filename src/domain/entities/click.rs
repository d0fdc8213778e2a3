//! Click entity: one recorded redirect in the append-only ledger.

use chrono::{DateTime, Utc};

/// A single resolved redirect, as stored in the ledger.
///
/// Ledger rows are append-only: they are never updated or deleted by normal
/// operation, and they intentionally survive hard deletion of the link they
/// reference.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub guide_id: Option<i64>,
    pub occurred_at: DateTime<Utc>,
    pub device: Option<String>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

/// Input data for appending one click to the ledger.
///
/// All metadata fields are optional; the extraction layer fills sentinel
/// defaults ("direct" referrer, loopback IP) before events reach here, but
/// the ledger itself accepts whatever it is given.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
    pub guide_id: Option<i64>,
    pub device: Option<String>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_click_minimal() {
        let click = NewClick {
            link_id: 3,
            guide_id: None,
            device: None,
            referrer: None,
            user_agent: None,
            ip_address: None,
        };

        assert_eq!(click.link_id, 3);
        assert!(click.device.is_none());
    }

    #[test]
    fn test_new_click_full() {
        let click = NewClick {
            link_id: 9,
            guide_id: Some(4),
            device: Some("mobile".to_string()),
            referrer: Some("https://news.ycombinator.com".to_string()),
            user_agent: Some("Mozilla/5.0 (Linux; Android 10; Mobile)".to_string()),
            ip_address: Some("203.0.113.9".to_string()),
        };

        assert_eq!(click.guide_id, Some(4));
        assert_eq!(click.device.as_deref(), Some("mobile"));
    }
}
