//! Search document - denormalized projection of an article
//!
//! Always derived from the article state that was just committed to the
//! record store, never the other way around.

use serde::{Deserialize, Serialize};

use crate::entities::Article;
use crate::value_objects::{ArticleId, ReviewStatus, UserId};

/// Primary key field name in the search index
pub const SEARCH_PRIMARY_KEY: &str = "article_id";

/// Indexed snapshot of an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocument {
    pub article_id: ArticleId,
    pub title: String,
    pub description: Option<String>,
    pub tag: Option<String>,
    pub category: String,
    pub rank: i32,
    pub link: String,
    pub image_url: String,
    pub shortened_link: Option<String>,
    pub contributor_id: UserId,
    pub review_status: ReviewStatus,
    pub stars: i64,
    pub un_stars: i64,
    pub views: i64,
    /// Unix seconds, so the engine can sort on it
    pub submitted_at: i64,
}

impl From<&Article> for SearchDocument {
    fn from(article: &Article) -> Self {
        Self {
            article_id: article.id,
            title: article.title.clone(),
            description: article.description.clone(),
            tag: article.tag.clone(),
            category: article.category.clone(),
            rank: article.rank,
            link: article.link.clone(),
            image_url: article.image_url.clone(),
            shortened_link: article.shortened_link.clone(),
            contributor_id: article.contributor_id,
            review_status: article.review_status,
            stars: article.stars,
            un_stars: article.un_stars,
            views: article.views,
            submitted_at: article.submitted_at.timestamp(),
        }
    }
}
