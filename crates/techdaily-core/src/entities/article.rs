//! Article entity - a contributed link with engagement counters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ArticleId, ReviewStatus, UserId, VoteTransition};

/// Article entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub description: Option<String>,
    pub tag: Option<String>,
    pub category: String,
    pub rank: i32,
    pub link: String,
    pub image_url: String,
    pub md_content: Option<String>,
    pub shortened_link: Option<String>,
    pub contributor_id: UserId,
    pub review_status: ReviewStatus,
    pub stars: i64,
    pub un_stars: i64,
    pub views: i64,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Materialize a stored article from an admitted submission
    pub fn from_new(id: ArticleId, new: NewArticle) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            tag: new.tag,
            category: new.category,
            rank: new.rank,
            link: new.link,
            image_url: new.image_url,
            md_content: new.md_content,
            shortened_link: new.shortened_link,
            contributor_id: new.contributor_id,
            review_status: new.review_status,
            stars: 0,
            un_stars: 0,
            views: 0,
            submitted_at: new.submitted_at,
            reviewed_at: None,
        }
    }

    #[inline]
    pub fn is_contributed_by(&self, user_id: UserId) -> bool {
        self.contributor_id == user_id
    }

    /// Apply the counter deltas of a vote transition
    ///
    /// Counters saturate at zero; a reachable sequence never needs it.
    pub fn apply_vote(&mut self, transition: &VoteTransition) {
        self.stars = (self.stars + transition.star_delta).max(0);
        self.un_stars = (self.un_stars + transition.un_star_delta).max(0);
    }

    /// Net score (`stars - un_stars`)
    #[inline]
    pub fn score(&self) -> i64 {
        self.stars - self.un_stars
    }

    /// Record a review decision
    pub fn record_review(&mut self, status: ReviewStatus, at: DateTime<Utc>) {
        self.review_status = status;
        self.reviewed_at = Some(at);
    }

    /// Apply an edit patch, returning true when the link changed
    ///
    /// An edit restamps the submission time and re-enters review unless the
    /// editor is an administrator.
    pub fn apply_edit(&mut self, patch: ArticlePatch, by_administrator: bool, at: DateTime<Utc>) -> bool {
        let mut link_changed = false;

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(tag) = patch.tag {
            self.tag = Some(tag);
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(rank) = patch.rank {
            self.rank = rank;
        }
        if let Some(link) = patch.link {
            link_changed = link != self.link;
            self.link = link;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }

        self.review_status = ReviewStatus::initial(by_administrator);
        self.submitted_at = at;
        link_changed
    }
}

/// Admitted submission waiting to be inserted into the record store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub description: Option<String>,
    pub tag: Option<String>,
    pub category: String,
    pub rank: i32,
    pub link: String,
    pub image_url: String,
    pub md_content: Option<String>,
    pub shortened_link: Option<String>,
    pub contributor_id: UserId,
    pub review_status: ReviewStatus,
    pub submitted_at: DateTime<Utc>,
}

/// Partial update of an article's descriptive fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
    pub category: Option<String>,
    pub rank: Option<i32>,
    pub link: Option<String>,
    pub image_url: Option<String>,
}

impl ArticlePatch {
    /// Links touched by this patch, for validation
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.link
            .as_deref()
            .into_iter()
            .chain(self.image_url.as_deref())
    }
}
