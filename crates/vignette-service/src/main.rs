//! Vignette Service - caching pass-through for category vignettes
//!
//! Serves vignettes per category from an in-memory cache with a 5 minute
//! freshness window, falling back to the vignettes backend on miss.

mod config;
mod error;
mod server;
mod types;

use crate::config::Config;
use crate::error::Result;
use crate::server::{start_server, ServerState, SharedState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::from_default_env().add_directive("vignette_service=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting Vignette Service...");

    let config = Config::from_env();
    info!("Port: {}", config.port);
    info!(
        "Backend: {} ({})",
        config.upstream_url.as_deref().unwrap_or("<not configured>"),
        if config.upstream_configured() { "ready" } else { "URL or token missing" }
    );
    if let Some(timeout) = config.upstream_timeout {
        info!("Backend timeout: {} seconds", timeout.as_secs());
    }
    if let Some(max) = config.cache_max_entries {
        info!("Cache max entries: {}", max);
    }

    let state: SharedState = Arc::new(ServerState::from_config(&config)?);

    // Start HTTP server (blocking)
    start_server(state, config.port).await?;

    Ok(())
}
