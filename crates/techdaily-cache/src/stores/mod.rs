//! Counter stores implementing the cache ports

mod submission_quota;
mod view_counter;

pub use submission_quota::{RedisQuotaStore, QUOTA_PREFIX};
pub use view_counter::{RedisViewCounter, TOTAL_VIEWS_KEY};

/// Pool for store tests against a live server, if `REDIS_URL` is set
#[cfg(test)]
pub(crate) async fn test_pool() -> Option<crate::pool::RedisPool> {
    let url = std::env::var("REDIS_URL").ok()?;
    let pool = crate::pool::RedisPool::new(crate::pool::RedisPoolConfig {
        url,
        max_connections: 4,
    })
    .ok()?;
    pool.health_check().await.ok()?;
    Some(pool)
}
