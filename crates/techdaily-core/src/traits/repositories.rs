//! Repository traits (ports) for the record store
//!
//! The record store is the single source of truth. These traits describe what
//! the engagement core needs from it; the database crate provides the
//! implementation.

use async_trait::async_trait;

use chrono::{DateTime, Utc};

use crate::entities::{Article, NewArticle, User, Vote};
use crate::error::DomainError;
use crate::value_objects::{ArticleId, ReviewStatus, UserId, VoteAction, VoteStatus, VoteTransition};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Pagination options for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub const MAX_SIZE: u32 = 100;

    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, Self::MAX_SIZE),
        }
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, 20)
    }
}

// ============================================================================
// Article Repository
// ============================================================================

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Find article by ID
    async fn find_by_id(&self, id: ArticleId) -> RepoResult<Option<Article>>;

    /// Find several articles, preserving the order of `ids`
    async fn find_by_ids(&self, ids: &[ArticleId]) -> RepoResult<Vec<Article>>;

    /// List articles in a review state, newest submission first
    async fn find_by_review_status(
        &self,
        status: ReviewStatus,
        page: PageRequest,
    ) -> RepoResult<Vec<Article>>;

    /// List articles submitted by a contributor, newest first
    async fn find_by_contributor(
        &self,
        contributor_id: UserId,
        page: PageRequest,
    ) -> RepoResult<Vec<Article>>;

    /// Insert an admitted submission and return the stored row
    async fn create(&self, article: &NewArticle) -> RepoResult<Article>;

    /// Persist descriptive and review fields
    ///
    /// Never writes `stars`, `un_stars` or `views`; those only move through
    /// atomic increments. Returns the row as stored, or `None` if it vanished.
    async fn update(&self, article: &Article) -> RepoResult<Option<Article>>;

    /// Write a review decision onto the stored row
    ///
    /// Touches only `review_status` and `reviewed_at`, so an edit committed
    /// since the caller last read the article is kept.
    async fn record_review(
        &self,
        id: ArticleId,
        status: ReviewStatus,
        at: DateTime<Utc>,
    ) -> RepoResult<Option<Article>>;

    /// Atomically increment the view counter
    async fn increment_views(&self, id: ArticleId) -> RepoResult<Option<Article>>;

    /// Delete the article row itself
    async fn delete(&self, id: ArticleId) -> RepoResult<bool>;

    /// Number of stored articles, whatever their review state
    async fn count(&self) -> RepoResult<u64>;
}

// ============================================================================
// Vote Repository
// ============================================================================

/// Outcome of an atomically applied vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteApplied {
    pub transition: VoteTransition,
    /// Article state after the counter deltas were committed
    pub article: Article,
}

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find the vote row for a (user, article) pair
    async fn find(&self, user_id: UserId, article_id: ArticleId) -> RepoResult<Option<Vote>>;

    /// Apply a vote action as one critical section
    ///
    /// Reads the current status, computes [`VoteTransition::compute`], writes
    /// the vote row and the article counter deltas atomically. Two concurrent
    /// calls for the same pair must not interleave. Returns `None` when the
    /// article does not exist, before anything is written.
    async fn apply(
        &self,
        article_id: ArticleId,
        user_id: UserId,
        action: VoteAction,
    ) -> RepoResult<Option<VoteApplied>>;

    /// List votes on an article with the given status, most recent change first
    async fn find_by_article(
        &self,
        article_id: ArticleId,
        status: VoteStatus,
        page: PageRequest,
    ) -> RepoResult<Vec<Vote>>;

    /// List votes cast by a user with the given status, most recent change first
    async fn find_by_user(
        &self,
        user_id: UserId,
        status: VoteStatus,
        page: PageRequest,
    ) -> RepoResult<Vec<Vote>>;

    /// Remove every vote on an article
    async fn delete_by_article(&self, article_id: ArticleId) -> RepoResult<u64>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Remove every comment on an article
    async fn delete_by_article(&self, article_id: ArticleId) -> RepoResult<u64>;
}

// ============================================================================
// User Directory
// ============================================================================

/// Identity and role resolver
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolve a user and its administrator capability
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Resolve several users; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[UserId]) -> RepoResult<Vec<User>>;
}
