//! PostgreSQL implementation of ArticleRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use tracing::instrument;

use techdaily_core::entities::{Article, NewArticle};
use techdaily_core::traits::{ArticleRepository, PageRequest, RepoResult};
use techdaily_core::value_objects::{ArticleId, ReviewStatus, UserId};

use crate::mappers::ArticleInsert;
use crate::models::{ArticleModel, ARTICLE_COLUMNS};

use super::error::{convert_all, map_db_error};

/// PostgreSQL implementation of ArticleRepository
#[derive(Clone)]
pub struct PgArticleRepository {
    pool: PgPool,
}

impl PgArticleRepository {
    /// Create a new PgArticleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE article_id = $1");
        let result = sqlx::query_as::<_, ArticleModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Article::try_from).transpose()
    }

    #[instrument(skip(self), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[ArticleId]) -> RepoResult<Vec<Article>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE article_id = ANY($1)");
        let rows = sqlx::query_as::<_, ArticleModel>(&sql)
            .bind(&raw)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut by_id: HashMap<ArticleId, Article> = convert_all::<_, Article>(rows)?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_review_status(
        &self,
        status: ReviewStatus,
        page: PageRequest,
    ) -> RepoResult<Vec<Article>> {
        let sql = format!(
            r#"
            SELECT {ARTICLE_COLUMNS}
            FROM articles
            WHERE review_status = $1
            ORDER BY submitted_at DESC, article_id DESC
            LIMIT $2 OFFSET $3
            "#
        );
        let rows = sqlx::query_as::<_, ArticleModel>(&sql)
            .bind(status.code())
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        convert_all(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_contributor(
        &self,
        contributor_id: UserId,
        page: PageRequest,
    ) -> RepoResult<Vec<Article>> {
        let sql = format!(
            r#"
            SELECT {ARTICLE_COLUMNS}
            FROM articles
            WHERE contributor_id = $1
            ORDER BY submitted_at DESC, article_id DESC
            LIMIT $2 OFFSET $3
            "#
        );
        let rows = sqlx::query_as::<_, ArticleModel>(&sql)
            .bind(contributor_id.into_inner())
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        convert_all(rows)
    }

    #[instrument(skip(self, article), fields(contributor_id = %article.contributor_id))]
    async fn create(&self, article: &NewArticle) -> RepoResult<Article> {
        let insert = ArticleInsert::new(article);
        let sql = format!(
            r#"
            INSERT INTO articles (
                title, description, tag, category, rank, link, image_url,
                md_content, shortened_link, contributor_id, review_status, submitted_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {ARTICLE_COLUMNS}
            "#
        );
        let model = sqlx::query_as::<_, ArticleModel>(&sql)
            .bind(insert.title)
            .bind(insert.description)
            .bind(insert.tag)
            .bind(insert.category)
            .bind(insert.rank)
            .bind(insert.link)
            .bind(insert.image_url)
            .bind(insert.md_content)
            .bind(insert.shortened_link)
            .bind(insert.contributor_id)
            .bind(insert.review_status)
            .bind(article.submitted_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Article::try_from(model)
    }

    #[instrument(skip(self, article), fields(article_id = %article.id))]
    async fn update(&self, article: &Article) -> RepoResult<Option<Article>> {
        // Counters are left alone; votes and views move them concurrently
        let sql = format!(
            r#"
            UPDATE articles
            SET title = $2, description = $3, tag = $4, category = $5, rank = $6,
                link = $7, image_url = $8, md_content = $9, shortened_link = $10,
                review_status = $11, submitted_at = $12, reviewed_at = $13
            WHERE article_id = $1
            RETURNING {ARTICLE_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, ArticleModel>(&sql)
            .bind(article.id.into_inner())
            .bind(&article.title)
            .bind(article.description.as_deref())
            .bind(article.tag.as_deref())
            .bind(&article.category)
            .bind(article.rank)
            .bind(&article.link)
            .bind(&article.image_url)
            .bind(article.md_content.as_deref())
            .bind(article.shortened_link.as_deref())
            .bind(article.review_status.code())
            .bind(article.submitted_at)
            .bind(article.reviewed_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Article::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn record_review(
        &self,
        id: ArticleId,
        status: ReviewStatus,
        at: DateTime<Utc>,
    ) -> RepoResult<Option<Article>> {
        let sql = format!(
            r#"
            UPDATE articles
            SET review_status = $2, reviewed_at = $3
            WHERE article_id = $1
            RETURNING {ARTICLE_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, ArticleModel>(&sql)
            .bind(id.into_inner())
            .bind(status.code())
            .bind(at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Article::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn increment_views(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        let sql = format!(
            r#"
            UPDATE articles
            SET views = views + 1
            WHERE article_id = $1
            RETURNING {ARTICLE_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, ArticleModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Article::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ArticleId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(total.max(0) as u64)
    }
}
