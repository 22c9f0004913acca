use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Deserialize, Serialize, FromRow, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    // Never serialized: the hash must not leave the backend in responses or logs.
    #[serde(skip_serializing, default)]
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
}
