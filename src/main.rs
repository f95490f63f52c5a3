//! Debate Analyst binary entry point.
//!
//! Logs go to stderr.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use debate_analyst::config::{Config, API_KEY_VAR, DEFAULT_LOG_LEVEL};
use debate_analyst::server::serve;
use tracing_subscriber::EnvFilter;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map_or(DEFAULT_LOG_LEVEL, |c| c.log_level.as_str());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("debate-analyst starting...");

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    if !config.has_api_key() {
        tracing::warn!("{API_KEY_VAR} is not set; analysis requests will fail until it is");
    }

    tracing::info!(
        "Configuration loaded: gateway={}, model={}, timeout={}ms",
        config.gateway_url,
        config.model,
        config.request_timeout_ms
    );

    if let Err(e) = serve(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    tracing::info!("debate-analyst shutdown complete");
}
