//! Infrastructure wiring
//!
//! Connects the record store, the cache and the search index and assembles
//! the [`ServiceContext`] the operations run against.

use std::sync::Arc;

use tracing::info;

use techdaily_cache::{RedisPool, RedisQuotaStore, RedisViewCounter};
use techdaily_common::{AppConfig, EngagementConfig};
use techdaily_db::{
    create_pool, run_migrations, PgArticleRepository, PgCommentRepository, PgPool,
    PgUserDirectory, PgVoteRepository,
};
use techdaily_search::MeiliSearchIndex;

use crate::services::{ServiceContext, ServiceContextBuilder};

/// Startup failures
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("Context error: {0}")]
    Context(String),
}

/// Connected clients for the three stores
#[derive(Debug, Clone)]
pub struct Infrastructure {
    pub pool: PgPool,
    pub redis: RedisPool,
    pub search: MeiliSearchIndex,
}

impl Infrastructure {
    /// Open every connection described by the configuration
    pub async fn connect(config: &AppConfig) -> Result<Self, BootstrapError> {
        info!("Connecting to PostgreSQL...");
        let pool = create_pool(&config.database)
            .await
            .map_err(|e| BootstrapError::Database(e.to_string()))?;
        info!("PostgreSQL connection established");

        info!("Connecting to Redis...");
        let redis = RedisPool::from_config(&config.redis)
            .map_err(|e| BootstrapError::Cache(e.to_string()))?;
        info!("Redis pool created");

        let search = MeiliSearchIndex::from_config(&config.search)
            .map_err(|e| BootstrapError::Search(e.to_string()))?;

        Ok(Self {
            pool,
            redis,
            search,
        })
    }

    /// Apply pending record store migrations
    pub async fn migrate(&self, dir: &str) -> Result<(), BootstrapError> {
        run_migrations(&self.pool, dir)
            .await
            .map_err(|e| BootstrapError::Migration(e.to_string()))?;
        info!(dir, "Migrations applied");
        Ok(())
    }

    /// Push ranking and filter settings to the search index
    pub async fn ensure_search_settings(&self) -> Result<(), BootstrapError> {
        self.search
            .ensure_settings()
            .await
            .map_err(|e| BootstrapError::Search(e.to_string()))
    }

    /// Ping the cache and the search engine
    pub async fn health_check(&self) -> Result<(), BootstrapError> {
        self.redis
            .health_check()
            .await
            .map_err(|e| BootstrapError::Cache(e.to_string()))?;
        self.search
            .health_check()
            .await
            .map_err(|e| BootstrapError::Search(e.to_string()))?;
        Ok(())
    }

    /// Assemble the service context over these connections
    pub fn context(&self, policy: &EngagementConfig) -> Result<ServiceContext, BootstrapError> {
        ServiceContextBuilder::new()
            .article_repo(Arc::new(PgArticleRepository::new(self.pool.clone())))
            .vote_repo(Arc::new(PgVoteRepository::new(self.pool.clone())))
            .comment_repo(Arc::new(PgCommentRepository::new(self.pool.clone())))
            .user_directory(Arc::new(PgUserDirectory::new(self.pool.clone())))
            .quota_store(Arc::new(RedisQuotaStore::new(
                self.redis.clone(),
                policy.submission_window_secs,
            )))
            .view_counter(Arc::new(RedisViewCounter::from_config(
                self.redis.clone(),
                policy,
            )))
            .search_index(Arc::new(self.search.clone()))
            .policy(policy.clone())
            .build()
            .map_err(|e| BootstrapError::Context(e.to_string()))
    }
}

/// Connect everything and build the service context
pub async fn build_context(config: &AppConfig) -> Result<ServiceContext, BootstrapError> {
    let infrastructure = Infrastructure::connect(config).await?;
    infrastructure.context(&config.engagement)
}
