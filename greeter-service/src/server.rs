//! Listener lifecycle.

use std::future::Future;

use tokio::net::TcpListener;

use crate::config::GreeterConfig;
use crate::handlers::{create_router, GreeterState};

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn serve(
    config: GreeterConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(&config.http_addr).await?;
    serve_on(listener, config, shutdown).await
}

/// Serve on an already bound listener.
pub async fn serve_on(
    listener: TcpListener,
    config: GreeterConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    let app = create_router(GreeterState::new(&config));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Keep serving; the process can still be killed.
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
