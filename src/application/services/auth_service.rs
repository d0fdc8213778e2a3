//! Authentication service: credentials, opaque session tokens, registration.

use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};
use serde_json::json;

use crate::domain::entities::{NewUser, User, UserRole};
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;
use crate::utils::token::generate_token;

type HmacSha256 = Hmac<Sha256>;

/// Service for account registration, login, and session validation.
///
/// Session tokens are opaque random values handed to the client in a
/// cookie. Only their HMAC-SHA256 (keyed by `signing_secret`) is stored, so
/// read-only database access cannot forge or verify a session. Passwords
/// are stored as argon2 PHC strings.
pub struct AuthService<U: UserRepository, S: SessionRepository> {
    users: Arc<U>,
    sessions: Arc<S>,
    signing_secret: String,
    session_ttl: Duration,
    /// When set, registration requires this shared secret; open
    /// registration otherwise (first-install convenience).
    registration_secret: Option<String>,
}

impl<U: UserRepository, S: SessionRepository> AuthService<U, S> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `signing_secret` - HMAC key; must stay stable across restarts or
    ///   every outstanding session is invalidated
    /// - `session_ttl_hours` - session lifetime from login
    pub fn new(
        users: Arc<U>,
        sessions: Arc<S>,
        signing_secret: String,
        session_ttl_hours: i64,
        registration_secret: Option<String>,
    ) -> Self {
        Self {
            users,
            sessions,
            signing_secret,
            session_ttl: Duration::hours(session_ttl_hours),
            registration_secret,
        }
    }

    /// Session lifetime in seconds, for the cookie `Max-Age`.
    pub fn session_ttl_seconds(&self) -> i64 {
        self.session_ttl.num_seconds()
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn hash_password(password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| AppError::internal("Password hashing failed", json!({})))
    }

    fn verify_password(hash: &str, password: &str) -> bool {
        PasswordHash::new(hash)
            .and_then(|parsed| Argon2::default().verify_password(password.as_bytes(), &parsed))
            .is_ok()
    }

    /// Registers a new admin account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when a registration secret is
    /// configured and the provided one does not match.
    /// Returns [`AppError::Validation`] when the email is already taken.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
        secret: Option<&str>,
    ) -> Result<User, AppError> {
        if let Some(required) = &self.registration_secret
            && secret != Some(required.as_str())
        {
            return Err(AppError::forbidden("Forbidden", json!({})));
        }

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::bad_request("User already exists", json!({})));
        }

        let password_hash = Self::hash_password(&password)?;

        self.users
            .create(NewUser {
                name,
                email,
                password_hash,
                role: UserRole::Admin,
            })
            .await
    }

    /// Verifies credentials and opens a session.
    ///
    /// Returns the user together with the raw token to place in the
    /// client's cookie. The same `Unauthorized` error covers unknown
    /// email and wrong password.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AppError> {
        let invalid = || {
            AppError::unauthorized("Invalid credentials", json!({}))
        };

        let user = self.users.find_by_email(email).await?.ok_or_else(invalid)?;

        if !Self::verify_password(&user.password_hash, password) {
            return Err(invalid());
        }

        let token = generate_token();
        let token_hash = self.hash_token(&token);
        let expires_at = Utc::now() + self.session_ttl;

        self.sessions
            .create(user.id, &token_hash, expires_at)
            .await?;

        Ok((user, token))
    }

    /// Validates a raw session token and loads its user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for unknown, expired, or revoked
    /// sessions, and for sessions whose user has been removed.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let token_hash = self.hash_token(token);

        let session = self
            .sessions
            .find_valid(&token_hash)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Invalid or expired session"}),
                )
            })?;

        self.users
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized("Unauthorized", json!({"reason": "Unknown user"}))
            })
    }

    /// Revokes the session behind a raw token. Unknown tokens are a no-op.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        let token_hash = self.hash_token(token);
        self.sessions.revoke(&token_hash).await
    }
}
