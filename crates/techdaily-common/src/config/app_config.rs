//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub search: SearchConfig,
    pub engagement: EngagementConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

/// Record store (PostgreSQL) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,
}

/// Rate/counter cache (Redis) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
}

/// Search index (Meilisearch) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_search_index")]
    pub index: String,
}

/// Submission quota and view counter policy
#[derive(Debug, Clone, Deserialize)]
pub struct EngagementConfig {
    /// Non-administrator submissions allowed per window
    #[serde(default = "default_submission_limit")]
    pub submission_daily_limit: u32,
    #[serde(default = "default_day_secs")]
    pub submission_window_secs: u64,
    #[serde(default = "default_day_secs")]
    pub view_counter_ttl_secs: u64,
    /// Lower bound of the value the daily view counter is seeded with
    #[serde(default = "default_view_seed_min")]
    pub view_seed_min: u64,
    #[serde(default = "default_view_seed_max")]
    pub view_seed_max: u64,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            submission_daily_limit: default_submission_limit(),
            submission_window_secs: default_day_secs(),
            view_counter_ttl_secs: default_day_secs(),
            view_seed_min: default_view_seed_min(),
            view_seed_max: default_view_seed_max(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "techdaily".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    10
}

fn default_migrations_dir() -> String {
    "./migrations".to_string()
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_search_index() -> String {
    "articles".to_string()
}

fn default_submission_limit() -> u32 {
    1
}

fn default_day_secs() -> u64 {
    86_400 // 24 hours
}

fn default_view_seed_min() -> u64 {
    400
}

fn default_view_seed_max() -> u64 {
    800
}

/// Parse an optional variable, falling back to a default when unset
fn parse_or<T, F>(
    lookup: &F,
    name: &'static str,
    default: impl FnOnce() -> T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        None => Ok(default()),
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let engagement = EngagementConfig {
            submission_daily_limit: parse_or(
                &lookup,
                "SUBMISSION_DAILY_LIMIT",
                default_submission_limit,
            )?,
            submission_window_secs: parse_or(&lookup, "SUBMISSION_WINDOW_SECS", default_day_secs)?,
            view_counter_ttl_secs: parse_or(&lookup, "VIEW_COUNTER_TTL_SECS", default_day_secs)?,
            view_seed_min: parse_or(&lookup, "VIEW_SEED_MIN", default_view_seed_min)?,
            view_seed_max: parse_or(&lookup, "VIEW_SEED_MAX", default_view_seed_max)?,
        };

        if engagement.view_seed_min > engagement.view_seed_max {
            return Err(ConfigError::InvalidValue(
                "VIEW_SEED_MIN",
                format!(
                    "{} is greater than VIEW_SEED_MAX {}",
                    engagement.view_seed_min, engagement.view_seed_max
                ),
            ));
        }
        if engagement.submission_window_secs == 0 || engagement.view_counter_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "SUBMISSION_WINDOW_SECS",
                "expiry windows must be positive".to_string(),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: parse_or(&lookup, "APP_ENV", Environment::default)?,
            },
            database: DatabaseConfig {
                url: required(&lookup, "DATABASE_URL")?,
                max_connections: parse_or(
                    &lookup,
                    "DATABASE_MAX_CONNECTIONS",
                    default_max_connections,
                )?,
                min_connections: parse_or(
                    &lookup,
                    "DATABASE_MIN_CONNECTIONS",
                    default_min_connections,
                )?,
                acquire_timeout_secs: parse_or(
                    &lookup,
                    "DATABASE_ACQUIRE_TIMEOUT_SECS",
                    default_acquire_timeout,
                )?,
                migrations_dir: lookup("MIGRATIONS_DIR").unwrap_or_else(default_migrations_dir),
            },
            redis: RedisConfig {
                url: required(&lookup, "REDIS_URL")?,
                max_connections: parse_or(
                    &lookup,
                    "REDIS_MAX_CONNECTIONS",
                    default_redis_max_connections,
                )?,
            },
            search: SearchConfig {
                url: required(&lookup, "SEARCH_URL")?,
                api_key: lookup("SEARCH_API_KEY").filter(|k| !k.is_empty()),
                index: lookup("SEARCH_INDEX").unwrap_or_else(default_search_index),
            },
            engagement,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
