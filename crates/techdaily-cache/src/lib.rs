//! # techdaily-cache
//!
//! Redis layer for the counters that expire on their own.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Submission Quota**: Per-contributor daily counter, reserved atomically
//! - **Daily Views**: Process-wide view total, seeded on first touch each day
//!
//! Every multi-step counter update runs as a Lua script so the read, the
//! increment and the expiry are one atomic step on the server.
//!
//! ## Example
//!
//! ```ignore
//! use techdaily_cache::{RedisPool, RedisQuotaStore, RedisViewCounter};
//!
//! let pool = RedisPool::from_config(&config.redis)?;
//! let quota = RedisQuotaStore::new(pool.clone(), config.engagement.submission_window_secs);
//! let views = RedisViewCounter::from_config(pool, &config.engagement);
//! ```

pub mod pool;
pub mod stores;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export store types
pub use stores::{RedisQuotaStore, RedisViewCounter, QUOTA_PREFIX, TOTAL_VIEWS_KEY};
