use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use listkeep_api::create_router;
use listkeep_config::constants::{DEFAULT_LOG_FILTER, RUST_LOG};
use listkeep_lists::ListService;
use listkeep_storage::Database;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, ConfigError};

/// Initialize tracing subscriber for structured logging
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(false)
        .compact()
        .init();
}

/// Router with HTTP tracing and CORS applied
pub fn build_app(service: ListService, config: &Config) -> Result<Router, ConfigError> {
    let cors = config.cors_layer()?;

    Ok(create_router(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

/// Open the store, serve the API until a shutdown signal arrives, then close the pool.
///
/// A database that cannot be opened is returned as an error before anything binds.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let db = Database::init_with_path(&config.database_path)
        .await
        .with_context(|| {
            format!(
                "Failed to open database at {}",
                config.database_path.display()
            )
        })?;

    let service = ListService::new(Arc::new(db.store()));
    let app = build_app(service, &config)?;

    let addr = SocketAddr::new(config.host, config.port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", addr);
    info!("CORS origin: {}", config.cors_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Completes on Ctrl+C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
