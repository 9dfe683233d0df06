//! budget-assistant - HTTP Server Entry Point
//!
//! Starts the HTTP server that exposes the budget estimation API.

use budget_assistant::{api, config::Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "budget_assistant=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Loaded configuration: {} event types in ratio table",
        config.estimator.ratios.len()
    );

    // Start HTTP server
    api::serve(config).await?;

    Ok(())
}
