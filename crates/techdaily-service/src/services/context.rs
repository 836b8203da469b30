//! Service context - dependency container for services
//!
//! Holds every port the engagement core talks to, plus the submission and
//! view counter policy.

use std::sync::Arc;

use techdaily_common::EngagementConfig;
use techdaily_core::traits::{
    ArticleRepository, CommentRepository, DailyViewCounter, LinkEnricher, PassthroughEnricher,
    SearchIndex, SubmissionQuotaStore, UserDirectory, VoteRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every collaborator sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Record store
    article_repo: Arc<dyn ArticleRepository>,
    vote_repo: Arc<dyn VoteRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    user_directory: Arc<dyn UserDirectory>,

    // Rate/counter cache
    quota_store: Arc<dyn SubmissionQuotaStore>,
    view_counter: Arc<dyn DailyViewCounter>,

    // Search index
    search_index: Arc<dyn SearchIndex>,

    link_enricher: Arc<dyn LinkEnricher>,
    policy: EngagementConfig,
}

impl ServiceContext {
    /// Get the article repository
    pub fn article_repo(&self) -> &dyn ArticleRepository {
        self.article_repo.as_ref()
    }

    /// Get the vote repository
    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the identity and role resolver
    pub fn user_directory(&self) -> &dyn UserDirectory {
        self.user_directory.as_ref()
    }

    /// Get the submission quota store
    pub fn quota_store(&self) -> &dyn SubmissionQuotaStore {
        self.quota_store.as_ref()
    }

    /// Get the daily view counter
    pub fn view_counter(&self) -> &dyn DailyViewCounter {
        self.view_counter.as_ref()
    }

    /// Get the search index
    pub fn search_index(&self) -> &dyn SearchIndex {
        self.search_index.as_ref()
    }

    pub fn link_enricher(&self) -> &dyn LinkEnricher {
        self.link_enricher.as_ref()
    }

    /// Submission quota and view counter policy
    pub fn policy(&self) -> &EngagementConfig {
        &self.policy
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("cache_stores", &"...")
            .field("search_index", &"...")
            .field("policy", &self.policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    article_repo: Option<Arc<dyn ArticleRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    user_directory: Option<Arc<dyn UserDirectory>>,
    quota_store: Option<Arc<dyn SubmissionQuotaStore>>,
    view_counter: Option<Arc<dyn DailyViewCounter>>,
    search_index: Option<Arc<dyn SearchIndex>>,
    link_enricher: Option<Arc<dyn LinkEnricher>>,
    policy: Option<EngagementConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn article_repo(mut self, repo: Arc<dyn ArticleRepository>) -> Self {
        self.article_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn user_directory(mut self, directory: Arc<dyn UserDirectory>) -> Self {
        self.user_directory = Some(directory);
        self
    }

    pub fn quota_store(mut self, store: Arc<dyn SubmissionQuotaStore>) -> Self {
        self.quota_store = Some(store);
        self
    }

    pub fn view_counter(mut self, counter: Arc<dyn DailyViewCounter>) -> Self {
        self.view_counter = Some(counter);
        self
    }

    pub fn search_index(mut self, index: Arc<dyn SearchIndex>) -> Self {
        self.search_index = Some(index);
        self
    }

    /// Defaults to [`PassthroughEnricher`]
    pub fn link_enricher(mut self, enricher: Arc<dyn LinkEnricher>) -> Self {
        self.link_enricher = Some(enricher);
        self
    }

    /// Defaults to [`EngagementConfig::default`]
    pub fn policy(mut self, policy: EngagementConfig) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            article_repo: required(self.article_repo, "article_repo")?,
            vote_repo: required(self.vote_repo, "vote_repo")?,
            comment_repo: required(self.comment_repo, "comment_repo")?,
            user_directory: required(self.user_directory, "user_directory")?,
            quota_store: required(self.quota_store, "quota_store")?,
            view_counter: required(self.view_counter, "view_counter")?,
            search_index: required(self.search_index, "search_index")?,
            link_enricher: self
                .link_enricher
                .unwrap_or_else(|| Arc::new(PassthroughEnricher)),
            policy: self.policy.unwrap_or_default(),
        })
    }
}
