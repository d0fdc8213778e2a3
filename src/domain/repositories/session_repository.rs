//! Repository trait for session storage.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A stored session. Only the HMAC of the opaque token is persisted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

/// Repository interface for session management.
///
/// Sessions are opaque-token records with an expiry and an optional
/// revocation timestamp; a session is valid when it is neither expired nor
/// revoked.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Creates a session for a user.
    async fn create(
        &self,
        user_id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Session, AppError>;

    /// Finds a session by token hash that is neither expired nor revoked.
    async fn find_valid(&self, token_hash: &str) -> Result<Option<Session>, AppError>;

    /// Revokes a session by token hash. Revoking an unknown or already
    /// revoked token is a no-op.
    async fn revoke(&self, token_hash: &str) -> Result<(), AppError>;

    /// Revokes every active session of a user. Returns the number revoked.
    async fn revoke_all_for_user(&self, user_id: i64) -> Result<u64, AppError>;

    /// Deletes sessions past their expiry. Returns the number removed.
    async fn purge_expired(&self) -> Result<u64, AppError>;
}
