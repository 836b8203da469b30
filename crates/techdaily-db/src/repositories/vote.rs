//! PostgreSQL implementation of VoteRepository
//!
//! A vote is applied inside one transaction holding a row lock on the
//! `(user, article)` vote row, so the read of the current status and the
//! write of the next status plus counter deltas cannot interleave with a
//! concurrent request for the same pair.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, instrument};

use techdaily_core::entities::{Article, Vote};
use techdaily_core::error::DomainError;
use techdaily_core::traits::{PageRequest, RepoResult, VoteApplied, VoteRepository};
use techdaily_core::value_objects::{ArticleId, UserId, VoteAction, VoteStatus, VoteTransition};

use crate::models::{ArticleModel, VoteModel, ARTICLE_COLUMNS};

use super::error::{convert_all, map_db_error};

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lock the article against deletion for the rest of the transaction
    async fn lock_article(conn: &mut PgConnection, article_id: i64) -> RepoResult<bool> {
        let found = sqlx::query_scalar::<_, i64>(
            "SELECT article_id FROM articles WHERE article_id = $1 FOR KEY SHARE",
        )
        .bind(article_id)
        .fetch_optional(conn)
        .await
        .map_err(map_db_error)?;

        Ok(found.is_some())
    }

    async fn lock_vote(
        conn: &mut PgConnection,
        user_id: i64,
        article_id: i64,
    ) -> RepoResult<Option<VoteStatus>> {
        let status = sqlx::query_scalar::<_, i16>(
            r#"
            SELECT status FROM votes
            WHERE user_id = $1 AND article_id = $2
            FOR UPDATE
            "#,
        )
        .bind(user_id)
        .bind(article_id)
        .fetch_optional(conn)
        .await
        .map_err(map_db_error)?;

        status.map(decode_status).transpose()
    }

    /// Insert the first row for a pair; false when another request won the race
    async fn insert_vote(
        conn: &mut PgConnection,
        user_id: i64,
        article_id: i64,
        status: VoteStatus,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO votes (user_id, article_id, status, changed_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (user_id, article_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(article_id)
        .bind(status.code())
        .execute(conn)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn update_vote(
        conn: &mut PgConnection,
        user_id: i64,
        article_id: i64,
        status: VoteStatus,
    ) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE votes
            SET status = $3, changed_at = NOW()
            WHERE user_id = $1 AND article_id = $2
            "#,
        )
        .bind(user_id)
        .bind(article_id)
        .bind(status.code())
        .execute(conn)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    /// Apply counter deltas with an in-place increment and return the row
    async fn apply_deltas(
        conn: &mut PgConnection,
        article_id: i64,
        transition: &VoteTransition,
    ) -> RepoResult<ArticleModel> {
        let sql = format!(
            r#"
            UPDATE articles
            SET stars = stars + $2, un_stars = un_stars + $3
            WHERE article_id = $1
            RETURNING {ARTICLE_COLUMNS}
            "#
        );
        sqlx::query_as::<_, ArticleModel>(&sql)
            .bind(article_id)
            .bind(transition.star_delta)
            .bind(transition.un_star_delta)
            .fetch_one(conn)
            .await
            .map_err(map_db_error)
    }

    async fn fetch_article(conn: &mut PgConnection, article_id: i64) -> RepoResult<ArticleModel> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE article_id = $1");
        sqlx::query_as::<_, ArticleModel>(&sql)
            .bind(article_id)
            .fetch_one(conn)
            .await
            .map_err(map_db_error)
    }
}

fn decode_status(code: i16) -> RepoResult<VoteStatus> {
    VoteStatus::from_code(code)
        .ok_or_else(|| DomainError::DatabaseError(format!("unknown vote status {code}")))
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: UserId, article_id: ArticleId) -> RepoResult<Option<Vote>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r#"
            SELECT user_id, article_id, status, changed_at
            FROM votes
            WHERE user_id = $1 AND article_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(article_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Vote::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn apply(
        &self,
        article_id: ArticleId,
        user_id: UserId,
        action: VoteAction,
    ) -> RepoResult<Option<VoteApplied>> {
        let (article_id, user_id) = (article_id.into_inner(), user_id.into_inner());
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if !Self::lock_article(&mut tx, article_id).await? {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(None);
        }

        let transition = match Self::lock_vote(&mut tx, user_id, article_id).await? {
            Some(current) => {
                let transition = VoteTransition::compute(current, action);
                if transition.changes_status() {
                    Self::update_vote(&mut tx, user_id, article_id, transition.next).await?;
                }
                transition
            }
            None => {
                let transition = VoteTransition::compute(VoteStatus::Neutral, action);
                if transition.changes_status()
                    && !Self::insert_vote(&mut tx, user_id, article_id, transition.next).await?
                {
                    // A concurrent first vote committed its row; redo against it
                    debug!(user_id, article_id, "Vote row appeared concurrently, retrying");
                    let current = Self::lock_vote(&mut tx, user_id, article_id)
                        .await?
                        .unwrap_or_default();
                    let transition = VoteTransition::compute(current, action);
                    if transition.changes_status() {
                        Self::update_vote(&mut tx, user_id, article_id, transition.next).await?;
                    }
                    transition
                } else {
                    transition
                }
            }
        };

        let model = if transition.is_noop() {
            Self::fetch_article(&mut tx, article_id).await?
        } else {
            Self::apply_deltas(&mut tx, article_id, &transition).await?
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(Some(VoteApplied {
            transition,
            article: Article::try_from(model)?,
        }))
    }

    #[instrument(skip(self))]
    async fn find_by_article(
        &self,
        article_id: ArticleId,
        status: VoteStatus,
        page: PageRequest,
    ) -> RepoResult<Vec<Vote>> {
        let rows = sqlx::query_as::<_, VoteModel>(
            r#"
            SELECT user_id, article_id, status, changed_at
            FROM votes
            WHERE article_id = $1 AND status = $2
            ORDER BY changed_at DESC, user_id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(article_id.into_inner())
        .bind(status.code())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        convert_all(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_user(
        &self,
        user_id: UserId,
        status: VoteStatus,
        page: PageRequest,
    ) -> RepoResult<Vec<Vote>> {
        let rows = sqlx::query_as::<_, VoteModel>(
            r#"
            SELECT user_id, article_id, status, changed_at
            FROM votes
            WHERE user_id = $1 AND status = $2
            ORDER BY changed_at DESC, article_id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(user_id.into_inner())
        .bind(status.code())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        convert_all(rows)
    }

    #[instrument(skip(self))]
    async fn delete_by_article(&self, article_id: ArticleId) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM votes WHERE article_id = $1")
            .bind(article_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
