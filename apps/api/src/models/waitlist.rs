use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WaitlistEntry {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub occupation: Option<String>,
    pub interests: Option<String>,
    pub newsletter: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated signup fields. The email is already trimmed and lowercased.
#[derive(Debug, Clone)]
pub struct NewWaitlistEntry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub occupation: Option<String>,
    pub interests: Option<String>,
    pub newsletter: bool,
}
