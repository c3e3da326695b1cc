//! HTTP server initialization and runtime setup.
//!
//! Wires configuration into the resolver, spawns the audit worker, and runs
//! the Axum server until a shutdown signal arrives.

use crate::audit::click_worker::run_click_worker;
use crate::config::Config;
use crate::routes::app_router;
use crate::routing::Resolver;
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redirect resolver bound to the configured destination base
/// - Background click audit worker
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or the
/// server hits a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let resolver = Arc::new(Resolver::new(&config.destination_base));
    tracing::info!("Routing clicks to {}", resolver.destination_base());

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(click_rx));
    tracing::info!("Click worker started");

    let state = AppState::new(resolver, click_tx);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
