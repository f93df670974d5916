//! LibreNMS inventory report
//!
//! Connects to the LibreNMS API described by `LIBRENMS_URL`,
//! `LIBRENMS_TOKEN` and `LIBRENMS_TIMEOUT_SECS`, then prints a summary of
//! devices, open alerts, locations and services.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod report;

use anyhow::{Context, Result};
use librenms_client::{ClientConfig, LibreNmsClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration from environment variables
    let config = ClientConfig::from_env().context("loading LibreNMS configuration")?;
    info!("Configuration:");
    info!("  LibreNMS URL: {}", config.base_url);
    info!(
        "  Timeout: {}",
        config.timeout.map_or_else(|| "none".to_string(), |t| format!("{}s", t.as_secs()))
    );

    let client = LibreNmsClient::from_config(&config)?;
    let summary = report::summarize(&client).await?;
    println!("{summary}");

    Ok(())
}
