//! User entity for admin/editor accounts.

use chrono::{DateTime, Utc};

/// Account role. Stored as text; both roles may manage content, the
/// distinction is reserved for future permission splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Editor,
}

impl UserRole {
    pub const ADMIN: &'static str = "admin";
    pub const EDITOR: &'static str = "editor";

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => Self::ADMIN,
            UserRole::Editor => Self::EDITOR,
        }
    }
}

/// An account able to authenticate against the admin API.
///
/// `password_hash` is an argon2 PHC string; the raw password is never
/// stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_as_str() {
        assert_eq!(UserRole::Admin.as_str(), "admin");
        assert_eq!(UserRole::Editor.as_str(), "editor");
    }
}
