//! Server startup.

use gear_core::{Error, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::config::ServerConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Bind and serve until SIGINT or SIGTERM.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let state = Arc::new(AppState::new(config.secret));
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "License API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
        .map_err(|e| Error::Internal(format!("server error: {}", e)))?;

    info!("License API stopped");
    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn wait_for_shutdown() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
