//! # techdaily-db
//!
//! Record store implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! The record store is the single source of truth for articles, votes and
//! comments. This crate provides:
//!
//! - Connection pool management and runtime migrations
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers
//! - Repository implementations, including the transactional vote apply
//!
//! ## Usage
//!
//! ```rust,ignore
//! use techdaily_common::AppConfig;
//! use techdaily_db::{create_pool, PgArticleRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     let articles = PgArticleRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool};
pub use repositories::{
    PgArticleRepository, PgCommentRepository, PgUserDirectory, PgVoteRepository,
};
