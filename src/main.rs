//! # GeoTZ Server Main Entry Point
//!
//! This is the main entry point for the GeoTZ Server application.
//! It initializes logging, loads configuration, builds the timezone
//! boundary index, and serves the HTTP API.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod services;
mod utils;

use crate::api::ApiService;
use crate::config::Config;
use crate::services::locator::{GeoTimezoneLocator, TimezoneLocator};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geotz_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting GeoTZ Server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Host: {}, Port: {}", config.host, config.port);

    // The boundary index is immutable once built; load it up front and share
    // it across all request handlers.
    info!("Loading timezone boundary index...");
    let locator: Arc<dyn TimezoneLocator> = Arc::new(GeoTimezoneLocator::new());
    info!("Timezone boundary index loaded");

    let api = ApiService::new(locator);
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}:{}: {}", config.host, config.port, e))?;

    info!("HTTP server listening on {}:{}", config.host, config.port);

    axum::serve(listener, api.router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Application stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
