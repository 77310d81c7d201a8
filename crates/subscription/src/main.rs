use anyhow::{Context, Result};
use shared::{
    config::{Config, ConnectionManager},
    utils::Logger,
};
use subscription::{handler::AppRouter, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _logger = Logger::new(
        "subscription-service",
        config.is_dev,
        config.otel_endpoint.as_deref(),
    )
    .context("Failed to initialize logging")?;

    let db_pool = ConnectionManager::new_pool(&config.database, config.run_migrations)
        .await
        .context("Failed to initialize database pool")?;

    let state = AppState::new(db_pool).context("Failed to create AppState")?;

    info!("🚀 Subscription service starting on port {}", config.port);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Subscription service shutdown complete.");

    Ok(())
}
