//! VETBOOK API Server Entry Point
//!
//! Bootstraps configuration, opens the filesystem blob store, and starts
//! the Axum HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tracing_subscriber::EnvFilter;
use vetbook_api::{create_api_router, ApiConfig, ApiError, ApiResult};
use vetbook_storage::{FsBlobStore, PlaybookStore};

#[tokio::main]
async fn main() -> ApiResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ApiConfig::from_env();
    let store = PlaybookStore::new(Arc::new(FsBlobStore::new(&config.data_dir)));

    let app: Router = create_api_router(store, &config);

    let addr = resolve_bind_addr(&config)?;
    tracing::info!(%addr, data_dir = %config.data_dir.display(), "Starting VETBOOK API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

fn resolve_bind_addr(config: &ApiConfig) -> ApiResult<SocketAddr> {
    let addr = format!("{}:{}", config.bind_host, config.port);
    addr.parse::<SocketAddr>()
        .map_err(|e| ApiError::invalid_input(format!("Invalid bind address {}: {}", addr, e)))
}
