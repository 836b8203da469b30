//! Meilisearch-backed [`SearchIndex`]

use std::time::Duration;

use async_trait::async_trait;
use meilisearch_sdk::client::Client;
use meilisearch_sdk::indexes::Index;
use meilisearch_sdk::task_info::TaskInfo;
use meilisearch_sdk::tasks::Task;
use tracing::{debug, info, instrument, warn};

use techdaily_common::SearchConfig;
use techdaily_core::entities::{SearchDocument, SEARCH_PRIMARY_KEY};
use techdaily_core::traits::{RepoResult, SearchIndex};
use techdaily_core::value_objects::ArticleId;

use crate::error::{SearchClientError, SearchResult};
use crate::settings::article_settings;

/// How long a watcher follows a write task before giving up on it
const TASK_WATCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Follow an engine task to its end, logging it if it did not succeed
///
/// Returns the finished task, or `None` when its outcome stayed unknown.
pub(crate) async fn settle_task(
    client: &Client,
    task: TaskInfo,
    step: &'static str,
    article_id: ArticleId,
    timeout: Duration,
) -> Option<Task> {
    let task_uid = task.task_uid;
    match task.wait_for_completion(client, None, Some(timeout)).await {
        Ok(Task::Failed { content }) => {
            warn!(
                step,
                article_id = %article_id,
                task_uid,
                error = %content.error,
                "Search index task failed; document is stale"
            );
            Some(Task::Failed { content })
        }
        Ok(task) => {
            debug!(step, article_id = %article_id, task_uid, "Search index task finished");
            Some(task)
        }
        Err(e) => {
            warn!(
                step,
                article_id = %article_id,
                task_uid,
                error = %e,
                "Search index task outcome unknown"
            );
            None
        }
    }
}

/// Article index on a Meilisearch server
///
/// Writes return once the engine has enqueued them; a background watcher
/// follows each task and logs the ones that fail. A failed enqueue is
/// reported to the caller, which decides whether it matters.
#[derive(Clone)]
pub struct MeiliSearchIndex {
    client: Client,
    index_name: String,
}

impl std::fmt::Debug for MeiliSearchIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeiliSearchIndex")
            .field("index", &self.index_name)
            .finish()
    }
}

impl MeiliSearchIndex {
    pub fn new(url: &str, api_key: Option<&str>, index_name: impl Into<String>) -> SearchResult<Self> {
        let client =
            Client::new(url, api_key).map_err(|e| SearchClientError::CreateClient(e.to_string()))?;
        let index_name = index_name.into();
        info!(url = %url, index = %index_name, "Search client created");

        Ok(Self { client, index_name })
    }

    pub fn from_config(config: &SearchConfig) -> SearchResult<Self> {
        Self::new(&config.url, config.api_key.as_deref(), config.index.clone())
    }

    fn index(&self) -> Index {
        self.client.index(&self.index_name)
    }

    /// Apply the article index settings and wait until the engine has them
    #[instrument(skip(self), fields(index = %self.index_name))]
    pub async fn ensure_settings(&self) -> SearchResult<()> {
        let task = self.index().set_settings(&article_settings()).await?;
        task.wait_for_completion(&self.client, None, None).await?;
        info!("Search index settings applied");
        Ok(())
    }

    fn watch(&self, task: TaskInfo, step: &'static str, article_id: ArticleId) {
        let client = self.client.clone();
        tokio::spawn(async move {
            settle_task(&client, task, step, article_id, TASK_WATCH_TIMEOUT).await;
        });
    }

    /// Check that the engine answers
    pub async fn health_check(&self) -> SearchResult<()> {
        self.client.health().await?;
        Ok(())
    }
}

#[async_trait]
impl SearchIndex for MeiliSearchIndex {
    #[instrument(skip(self, document), fields(article_id = %document.article_id))]
    async fn upsert(&self, document: &SearchDocument) -> RepoResult<()> {
        let task = self
            .index()
            .add_or_update(std::slice::from_ref(document), Some(SEARCH_PRIMARY_KEY))
            .await
            .map_err(SearchClientError::from)?;
        debug!(task_uid = task.task_uid, "Document upsert enqueued");
        self.watch(task, "upsert", document.article_id);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ArticleId) -> RepoResult<()> {
        let task = self
            .index()
            .delete_document(id.into_inner())
            .await
            .map_err(SearchClientError::from)?;
        debug!(task_uid = task.task_uid, "Document delete enqueued");
        self.watch(task, "delete", id);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get(&self, id: ArticleId) -> RepoResult<Option<SearchDocument>> {
        match self
            .index()
            .get_document::<SearchDocument>(&id.to_string())
            .await
            .map_err(SearchClientError::from)
        {
            Ok(document) => Ok(Some(document)),
            Err(e) if e.is_document_not_found() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str, limit: usize) -> RepoResult<Vec<SearchDocument>> {
        let results = self
            .index()
            .search()
            .with_query(query)
            .with_limit(limit)
            .execute::<SearchDocument>()
            .await
            .map_err(SearchClientError::from)?;

        Ok(results.hits.into_iter().map(|hit| hit.result).collect())
    }
}
