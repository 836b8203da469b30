//! Ports for the secondary stores and external collaborators
//!
//! The cache and the search index are write-only from the core's point of view,
//! except for the quota read during admission and the daily view total.

use async_trait::async_trait;

use crate::entities::SearchDocument;
use crate::value_objects::{ArticleId, UserId};

use super::repositories::RepoResult;

// ============================================================================
// Rate / Counter Cache
// ============================================================================

/// Result of an atomic quota reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaDecision {
    /// A slot was taken; `used` includes it
    Reserved { used: u32 },
    /// The window is already at the limit; nothing was consumed
    Exhausted { used: u32 },
}

impl QuotaDecision {
    #[inline]
    pub fn is_reserved(&self) -> bool {
        matches!(self, Self::Reserved { .. })
    }
}

/// Per-contributor daily submission counter with automatic expiry
#[async_trait]
pub trait SubmissionQuotaStore: Send + Sync {
    /// Check the counter and take one slot in a single atomic step
    ///
    /// The first slot of a window starts the expiry; later slots never refresh it.
    async fn try_reserve(&self, contributor_id: UserId, limit: u32) -> RepoResult<QuotaDecision>;

    /// Give back a slot taken by [`try_reserve`](Self::try_reserve)
    async fn release(&self, contributor_id: UserId) -> RepoResult<()>;
}

/// Process-wide daily view total with automatic expiry
#[async_trait]
pub trait DailyViewCounter: Send + Sync {
    /// Atomically count one view, seeding the counter first if absent
    async fn increment(&self) -> RepoResult<u64>;

    /// Current total, seeding the counter if absent
    async fn total(&self) -> RepoResult<u64>;
}

// ============================================================================
// Search Index
// ============================================================================

#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Insert or replace the document for an article
    async fn upsert(&self, document: &SearchDocument) -> RepoResult<()>;

    /// Remove the document for an article
    async fn delete(&self, id: ArticleId) -> RepoResult<()>;

    /// Fetch the indexed snapshot for an article
    async fn get(&self, id: ArticleId) -> RepoResult<Option<SearchDocument>>;

    /// Full-text query
    async fn search(&self, query: &str, limit: usize) -> RepoResult<Vec<SearchDocument>>;
}

// ============================================================================
// Link Enricher
// ============================================================================

/// Markdown fetching and URL shortening for submitted links
#[async_trait]
pub trait LinkEnricher: Send + Sync {
    /// Canonical markdown body behind a link
    async fn markdown(&self, link: &str) -> RepoResult<Option<String>>;

    /// Shortened form of a link
    async fn shorten(&self, link: &str) -> RepoResult<Option<String>>;
}

/// Enricher that fetches nothing and keeps links as they are
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughEnricher;

#[async_trait]
impl LinkEnricher for PassthroughEnricher {
    async fn markdown(&self, _link: &str) -> RepoResult<Option<String>> {
        Ok(None)
    }

    async fn shorten(&self, link: &str) -> RepoResult<Option<String>> {
        Ok(Some(link.to_string()))
    }
}
