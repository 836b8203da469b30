//! Consistency coordinator
//!
//! Every mutating operation commits to the record store first. Whatever
//! follows (the daily view counter, the quota refund, the search index) is
//! attempted immediately but is best-effort: a failure is logged with the
//! step and article and never turns a committed write into a failed
//! operation.

use tracing::{debug, warn};

use techdaily_core::entities::{Article, SearchDocument};
use techdaily_core::value_objects::{ArticleId, UserId};

use super::context::ServiceContext;

/// Sequences the secondary writes that follow a record store commit
pub struct SyncCoordinator<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SyncCoordinator<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Upsert the search document of a freshly committed article
    ///
    /// The row is re-read first so that, of two racing projections, the later
    /// upsert carries the later state. A row that vanished in between is not
    /// projected. If the re-read fails the committed snapshot is used.
    /// Returns whether the index holds the article's current document.
    pub async fn project(&self, article: &Article, step: &'static str) -> bool {
        let current = match self.ctx.article_repo().find_by_id(article.id).await {
            Ok(Some(current)) => current,
            Ok(None) => {
                debug!(step, article_id = %article.id, "Article gone before projection");
                return false;
            }
            Err(e) => {
                debug!(step, article_id = %article.id, error = %e, "Re-read failed, projecting snapshot");
                article.clone()
            }
        };

        let document = SearchDocument::from(&current);
        match self.ctx.search_index().upsert(&document).await {
            Ok(()) => {
                debug!(step, article_id = %article.id, "Search document projected");
                true
            }
            Err(e) => {
                warn!(
                    step,
                    article_id = %article.id,
                    error = %e,
                    "Search index upsert failed; record store write stands"
                );
                false
            }
        }
    }

    /// Remove the search document of an article being deleted
    pub async fn retract(&self, article_id: ArticleId) -> bool {
        match self.ctx.search_index().delete(article_id).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    step = "delete",
                    article_id = %article_id,
                    error = %e,
                    "Search index delete failed; document may linger"
                );
                false
            }
        }
    }

    /// Count one view in the daily total
    pub async fn count_daily_view(&self, article_id: ArticleId) -> Option<u64> {
        match self.ctx.view_counter().increment().await {
            Ok(total) => Some(total),
            Err(e) => {
                warn!(
                    step = "view",
                    article_id = %article_id,
                    error = %e,
                    "Daily view counter increment failed"
                );
                None
            }
        }
    }

    /// Give back a quota slot whose submission never reached the record store
    pub async fn refund_quota(&self, contributor_id: UserId) {
        if let Err(e) = self.ctx.quota_store().release(contributor_id).await {
            warn!(
                step = "submit",
                %contributor_id,
                error = %e,
                "Quota refund failed; slot stays consumed until expiry"
            );
        }
    }
}
