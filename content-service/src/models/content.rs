//! Content record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `content` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Content {
    pub id: i64,
    pub title: String,
    pub html_content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing row: everything except the HTML body, plus its length.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ContentSummary {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub content_length: i32,
}

/// Row returned by the insert statement.
#[derive(Debug, Clone, FromRow)]
pub struct ContentCreated {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Row returned by the update statement.
#[derive(Debug, Clone, FromRow)]
pub struct ContentUpdated {
    pub id: i64,
    pub title: String,
    pub updated_at: DateTime<Utc>,
}

/// Identity of a removed row.
#[derive(Debug, Clone, FromRow)]
pub struct ContentDeleted {
    pub id: i64,
    pub title: String,
}
