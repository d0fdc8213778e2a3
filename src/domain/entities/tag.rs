//! Tag entity for content taxonomy.

use chrono::{DateTime, Utc};

/// A free-form content tag.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new tag.
#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: String,
    pub slug: String,
}
