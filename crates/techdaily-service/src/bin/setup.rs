//! Store setup entry point
//!
//! Run with:
//! ```bash
//! cargo run -p techdaily-service --bin techdaily-setup
//! ```
//!
//! Applies record store migrations, pushes the search index settings and
//! checks that the cache answers. Configuration is loaded from environment
//! variables.

use anyhow::Context;
use techdaily_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use techdaily_service::Infrastructure;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let env = std::env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse::<Environment>().ok())
        .unwrap_or_default();

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = ?e, "Setup failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Preparing stores...");

    let config = AppConfig::from_env().context("loading configuration")?;
    info!(env = ?config.app.env, name = %config.app.name, "Configuration loaded");

    let infrastructure = Infrastructure::connect(&config)
        .await
        .context("connecting to stores")?;

    infrastructure
        .migrate(&config.database.migrations_dir)
        .await
        .context("running migrations")?;

    infrastructure
        .ensure_search_settings()
        .await
        .context("configuring search index")?;

    infrastructure
        .health_check()
        .await
        .context("checking store health")?;

    // The context only wires ports; building it proves the config is complete
    infrastructure
        .context(&config.engagement)
        .context("assembling service context")?;

    info!("Stores ready");
    Ok(())
}
