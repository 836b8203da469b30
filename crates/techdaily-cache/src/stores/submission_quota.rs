//! Per-contributor daily submission quota.
//!
//! One counter per contributor. The first reservation of a window creates the
//! key and starts its expiry; later reservations only increment it, so the
//! window never slides.

use async_trait::async_trait;
use redis::Script;
use tracing::{debug, instrument};

use techdaily_core::traits::{QuotaDecision, RepoResult, SubmissionQuotaStore};
use techdaily_core::value_objects::UserId;

use crate::pool::RedisPool;

/// Key prefix for submission counters
pub const QUOTA_PREFIX: &str = "submission_quota:";

/// KEYS[1] counter, ARGV[1] limit, ARGV[2] window seconds.
/// Returns {reserved (0|1), used}.
const RESERVE_SCRIPT: &str = r"
local used = tonumber(redis.call('GET', KEYS[1]) or '0')
if used >= tonumber(ARGV[1]) then
    return {0, used}
end
used = redis.call('INCR', KEYS[1])
if used == 1 then
    redis.call('EXPIRE', KEYS[1], ARGV[2])
end
return {1, used}
";

/// KEYS[1] counter. Never goes below zero and keeps the remaining TTL.
const RELEASE_SCRIPT: &str = r"
local used = tonumber(redis.call('GET', KEYS[1]) or '0')
if used > 0 then
    return redis.call('DECR', KEYS[1])
end
return 0
";

/// Redis-backed [`SubmissionQuotaStore`]
#[derive(Debug, Clone)]
pub struct RedisQuotaStore {
    pool: RedisPool,
    window_secs: u64,
    reserve: Script,
    release: Script,
}

impl RedisQuotaStore {
    pub fn new(pool: RedisPool, window_secs: u64) -> Self {
        Self {
            pool,
            window_secs,
            reserve: Script::new(RESERVE_SCRIPT),
            release: Script::new(RELEASE_SCRIPT),
        }
    }

    fn key(contributor_id: UserId) -> String {
        format!("{QUOTA_PREFIX}{contributor_id}")
    }
}

#[async_trait]
impl SubmissionQuotaStore for RedisQuotaStore {
    #[instrument(skip(self))]
    async fn try_reserve(&self, contributor_id: UserId, limit: u32) -> RepoResult<QuotaDecision> {
        let mut conn = self.pool.get().await?;
        let (reserved, used): (i64, i64) = self
            .reserve
            .key(Self::key(contributor_id))
            .arg(limit)
            .arg(self.window_secs)
            .invoke_async(&mut conn)
            .await
            .map_err(crate::pool::RedisPoolError::from)?;

        let used = u32::try_from(used.max(0)).unwrap_or(u32::MAX);
        debug!(%contributor_id, used, reserved = reserved == 1, "Quota checked");

        Ok(if reserved == 1 {
            QuotaDecision::Reserved { used }
        } else {
            QuotaDecision::Exhausted { used }
        })
    }

    #[instrument(skip(self))]
    async fn release(&self, contributor_id: UserId) -> RepoResult<()> {
        let mut conn = self.pool.get().await?;
        let _: i64 = self
            .release
            .key(Self::key(contributor_id))
            .invoke_async(&mut conn)
            .await
            .map_err(crate::pool::RedisPoolError::from)?;
        Ok(())
    }
}
