//! Background worker draining the click-event channel.
//!
//! For each event the counter increment and the ledger append run as two
//! independent operations: they are not transactional with each other or
//! with the redirect that produced the event. Partial success is accepted.
//! Failures are logged and counted, never retried and never surfaced —
//! tracking is strictly at-most-once, best-effort.

use std::sync::Arc;

use metrics::counter;
use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::NewClick;
use crate::domain::repositories::{AffiliateLinkRepository, ClickRepository};

/// Runs until every sender is dropped and the channel drains.
pub async fn run_click_worker<L, C>(
    mut rx: mpsc::Receiver<ClickEvent>,
    links: Arc<L>,
    clicks: Arc<C>,
) where
    L: AffiliateLinkRepository + ?Sized,
    C: ClickRepository + ?Sized,
{
    while let Some(event) = rx.recv().await {
        let new_click = NewClick {
            link_id: event.link_id,
            guide_id: event.guide_id,
            device: Some(event.device),
            referrer: Some(event.referrer),
            user_agent: Some(event.user_agent),
            ip_address: Some(event.ip_address),
        };

        let (increment, append) = tokio::join!(
            links.increment_clicks(event.link_id),
            clicks.record(new_click)
        );

        if let Err(e) = increment {
            counter!("clicks_increment_failed_total").increment(1);
            warn!(link_id = event.link_id, error = %e, "Click counter increment failed");
        }

        match append {
            Ok(_) => {
                counter!("clicks_recorded_total").increment(1);
            }
            Err(e) => {
                counter!("clicks_record_failed_total").increment(1);
                warn!(link_id = event.link_id, error = %e, "Click ledger append failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Click;
    use crate::domain::repositories::{MockAffiliateLinkRepository, MockClickRepository};
    use crate::error::AppError;
    use chrono::Utc;
    use serde_json::json;

    fn test_event(link_id: i64) -> ClickEvent {
        ClickEvent {
            link_id,
            guide_id: None,
            device: "desktop".to_string(),
            referrer: "direct".to_string(),
            user_agent: "TestBot/1.0".to_string(),
            ip_address: "127.0.0.1".to_string(),
        }
    }

    fn stored_click(link_id: i64) -> Click {
        Click {
            id: 1,
            link_id,
            guide_id: None,
            occurred_at: Utc::now(),
            device: Some("desktop".to_string()),
            referrer: Some("direct".to_string()),
            user_agent: Some("TestBot/1.0".to_string()),
            ip_address: Some("127.0.0.1".to_string()),
        }
    }

    #[tokio::test]
    async fn test_worker_increments_and_appends() {
        let mut links = MockAffiliateLinkRepository::new();
        let mut clicks = MockClickRepository::new();

        links
            .expect_increment_clicks()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|_| Ok(()));

        clicks
            .expect_record()
            .withf(|c| c.link_id == 42 && c.device.as_deref() == Some("desktop"))
            .times(1)
            .returning(|_| Ok(stored_click(42)));

        let (tx, rx) = mpsc::channel(8);
        tx.send(test_event(42)).await.unwrap();
        drop(tx);

        run_click_worker(rx, Arc::new(links), Arc::new(clicks)).await;
    }

    #[tokio::test]
    async fn test_worker_survives_increment_failure() {
        let mut links = MockAffiliateLinkRepository::new();
        let mut clicks = MockClickRepository::new();

        links
            .expect_increment_clicks()
            .times(2)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        // The ledger append still happens for every event.
        clicks
            .expect_record()
            .times(2)
            .returning(|c| Ok(stored_click(c.link_id)));

        let (tx, rx) = mpsc::channel(8);
        tx.send(test_event(1)).await.unwrap();
        tx.send(test_event(2)).await.unwrap();
        drop(tx);

        run_click_worker(rx, Arc::new(links), Arc::new(clicks)).await;
    }

    #[tokio::test]
    async fn test_worker_survives_append_failure() {
        let mut links = MockAffiliateLinkRepository::new();
        let mut clicks = MockClickRepository::new();

        links.expect_increment_clicks().times(1).returning(|_| Ok(()));

        clicks
            .expect_record()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let (tx, rx) = mpsc::channel(8);
        tx.send(test_event(9)).await.unwrap();
        drop(tx);

        run_click_worker(rx, Arc::new(links), Arc::new(clicks)).await;
    }
}
