//! Vote database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for votes table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub user_id: i64,
    pub article_id: i64,
    pub status: i16,
    pub changed_at: DateTime<Utc>,
}
