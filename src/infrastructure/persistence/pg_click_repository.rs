//! PostgreSQL implementation of the click ledger.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

const CLICK_COLUMNS: &str =
    "id, link_id, guide_id, occurred_at, device, referrer, user_agent, ip_address";

/// PostgreSQL repository for the append-only click ledger.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let click = sqlx::query_as::<_, Click>(&format!(
            r#"
            INSERT INTO click_events (link_id, guide_id, device, referrer, user_agent, ip_address)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {CLICK_COLUMNS}
            "#
        ))
        .bind(new_click.link_id)
        .bind(new_click.guide_id)
        .bind(new_click.device)
        .bind(new_click.referrer)
        .bind(new_click.user_agent)
        .bind(new_click.ip_address)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(click)
    }

    async fn count_for_link(&self, link_id: i64) -> Result<i64, AppError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM click_events WHERE link_id = $1")
                .bind(link_id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }

    async fn recent_for_link(&self, link_id: i64, limit: i64) -> Result<Vec<Click>, AppError> {
        let clicks = sqlx::query_as::<_, Click>(&format!(
            r#"
            SELECT {CLICK_COLUMNS}
            FROM click_events
            WHERE link_id = $1
            ORDER BY occurred_at DESC
            LIMIT $2
            "#
        ))
        .bind(link_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(clicks)
    }
}
