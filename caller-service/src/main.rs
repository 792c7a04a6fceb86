use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use caller_service::{serve, shutdown_signal, CallerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "caller_service=info,discovery=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = CallerConfig::from_env().inspect_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
    })?;
    tracing::info!("Starting caller-service v{}", config.version);
    tracing::info!(
        "Greeter resolved as {:?}, upstream timeout {:?}",
        config.greeter_service,
        config.upstream_timeout()
    );

    serve(config, shutdown_signal()).await?;

    Ok(())
}
