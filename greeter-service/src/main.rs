use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeter_service::{serve, shutdown_signal, GreeterConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greeter_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a missing greeting stops us before we bind
    let config = GreeterConfig::from_env().inspect_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
    })?;
    tracing::info!("Starting greeter-service v{}", config.version);

    serve(config, shutdown_signal()).await?;

    Ok(())
}
