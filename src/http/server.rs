//! HTTP server startup logic.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::SHUTDOWN_GRACE_PERIOD_SECS;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to serve on {addr}: {source}")]
    Serve {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Serve `app` on `addr` until a shutdown signal arrives.
///
/// `listen` is the address as the operator wrote it and is only used for logging.
pub async fn start_server(app: Router, addr: SocketAddr, listen: &str) -> Result<(), ServerError> {
    let handle = Handle::new();
    shutdown::setup_shutdown_handler(
        handle.clone(),
        Duration::from_secs(SHUTDOWN_GRACE_PERIOD_SECS),
    );

    tracing::info!(addr = %format!("http://{}", listen), bound = %addr, "listening");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|source| ServerError::Serve { addr, source })
}
