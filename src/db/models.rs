use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub type PostId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Post {
    pub id: PostId,
    /// Stored by SQLite as `CURRENT_TIMESTAMP`, which is UTC without an offset.
    pub created: NaiveDateTime,
    pub title: String,
    pub content: String,
}
