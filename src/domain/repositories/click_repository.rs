//! Repository trait for the append-only click ledger.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for click events.
///
/// The ledger is append-only: there are deliberately no update or delete
/// operations on this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one click event to the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Callers on the
    /// tracking path log and drop this error rather than propagating it.
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts ledger entries for one link.
    async fn count_for_link(&self, link_id: i64) -> Result<i64, AppError>;

    /// Most recent ledger entries for one link, newest first.
    async fn recent_for_link(&self, link_id: i64, limit: i64) -> Result<Vec<Click>, AppError>;
}
