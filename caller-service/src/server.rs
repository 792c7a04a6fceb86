//! Startup wiring and listener lifecycle.

use std::future::Future;
use std::sync::Arc;

use discovery::StaticDiscovery;
use error::AppError;
use tokio::net::TcpListener;

use crate::config::CallerConfig;
use crate::handlers::{create_router, CallerState};
use crate::router::ServiceRouter;
use crate::upstream::UpstreamClient;

/// Build the handler state from configuration: the registry and the one
/// shared HTTP client.
pub fn build_state(config: &CallerConfig) -> Result<CallerState, AppError> {
    let discovery = StaticDiscovery::new(config.registry.clone());
    for name in discovery.names() {
        tracing::info!("Registered service {} -> {}", name, config.registry.services[name]);
    }

    let client = UpstreamClient::new(config.upstream_timeout(), config.upstream_connect_timeout())?;
    let service_router = ServiceRouter::new(Arc::new(discovery), client, config.greeter_service.clone());

    Ok(CallerState::new(service_router, &config.version))
}

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn serve(
    config: CallerConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(&config)?;
    let listener = TcpListener::bind(&config.http_addr).await?;
    serve_on(listener, state, shutdown).await?;
    Ok(())
}

/// Serve on an already bound listener.
pub async fn serve_on(
    listener: TcpListener,
    state: CallerState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
