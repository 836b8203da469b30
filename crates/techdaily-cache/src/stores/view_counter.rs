//! Process-wide daily view total.
//!
//! The counter is created on its first touch of the day with a random seed
//! and a fixed expiry; increments never refresh the expiry.

use async_trait::async_trait;
use rand::Rng;
use redis::Script;
use tracing::instrument;

use techdaily_common::EngagementConfig;
use techdaily_core::traits::{DailyViewCounter, RepoResult};

use crate::pool::{RedisPool, RedisPoolError};

/// Key of the daily view total
pub const TOTAL_VIEWS_KEY: &str = "article_total_views";

/// KEYS[1] counter, ARGV[1] seed, ARGV[2] ttl seconds, ARGV[3] "1" to count a view.
const TOUCH_SCRIPT: &str = r"
redis.call('SET', KEYS[1], ARGV[1], 'NX', 'EX', ARGV[2])
if ARGV[3] == '1' then
    return redis.call('INCR', KEYS[1])
end
return tonumber(redis.call('GET', KEYS[1]))
";

/// Redis-backed [`DailyViewCounter`]
#[derive(Debug, Clone)]
pub struct RedisViewCounter {
    pool: RedisPool,
    ttl_secs: u64,
    seed_min: u64,
    seed_max: u64,
    touch: Script,
}

impl RedisViewCounter {
    pub fn new(pool: RedisPool, ttl_secs: u64, seed_min: u64, seed_max: u64) -> Self {
        Self {
            pool,
            ttl_secs,
            seed_min: seed_min.min(seed_max),
            seed_max,
            touch: Script::new(TOUCH_SCRIPT),
        }
    }

    pub fn from_config(pool: RedisPool, config: &EngagementConfig) -> Self {
        Self::new(
            pool,
            config.view_counter_ttl_secs,
            config.view_seed_min,
            config.view_seed_max,
        )
    }

    fn seed(&self) -> u64 {
        rand::thread_rng().gen_range(self.seed_min..=self.seed_max)
    }

    async fn touch(&self, count_view: bool) -> RepoResult<u64> {
        let seed = self.seed();
        let mut conn = self.pool.get().await?;
        let total: i64 = self
            .touch
            .key(TOTAL_VIEWS_KEY)
            .arg(seed)
            .arg(self.ttl_secs)
            .arg(if count_view { "1" } else { "0" })
            .invoke_async(&mut conn)
            .await
            .map_err(RedisPoolError::from)?;

        Ok(u64::try_from(total).unwrap_or(0))
    }
}

#[async_trait]
impl DailyViewCounter for RedisViewCounter {
    #[instrument(skip(self))]
    async fn increment(&self) -> RepoResult<u64> {
        self.touch(true).await
    }

    #[instrument(skip(self))]
    async fn total(&self) -> RepoResult<u64> {
        self.touch(false).await
    }
}
