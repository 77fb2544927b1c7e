//! HTTP server lifecycle.
//!
//! [`start_server`] binds the configured address and serves until Ctrl-C.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::api::router::build_router;
use crate::api::service::TopSecretService;
use crate::utils::ServerConfig;

/// Errors that can occur when starting or running the server
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address
    #[error("bind error: {0}")]
    Bind(String),

    /// The server hit a fatal error while serving
    #[error("serve error: {0}")]
    Serve(String),
}

/// Bind to `config` and serve until the process receives Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid, the listener cannot bind,
/// or serving fails.
pub async fn start_server(config: &ServerConfig, service: Arc<TopSecretService>) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))?;

    let router = build_router(service);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C");
        // Without a signal handler, keep serving
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
