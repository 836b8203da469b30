//! Article database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Column list shared by every query returning [`ArticleModel`]
pub(crate) const ARTICLE_COLUMNS: &str = "article_id, title, description, tag, category, rank, \
     link, image_url, md_content, shortened_link, contributor_id, review_status, \
     stars, un_stars, views, submitted_at, reviewed_at";

/// Database model for articles table
#[derive(Debug, Clone, FromRow)]
pub struct ArticleModel {
    pub article_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub tag: Option<String>,
    pub category: String,
    pub rank: i32,
    pub link: String,
    pub image_url: String,
    pub md_content: Option<String>,
    pub shortened_link: Option<String>,
    pub contributor_id: i64,
    pub review_status: i16,
    pub stars: i64,
    pub un_stars: i64,
    pub views: i64,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl ArticleModel {
    /// Check if a review decision has been recorded
    #[inline]
    pub fn is_reviewed(&self) -> bool {
        self.reviewed_at.is_some()
    }
}
