//! # Pool Predictions Server
//!
//! Application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool
//! - HTTP server

use anyhow::Result;
use tracing::info;

use pool_predictions::config::Settings;
use pool_predictions::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    pool_predictions::telemetry::init_tracing();

    info!("Starting Pool Predictions server...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        nickname_min_length = settings.nickname.min_length,
        nickname_max_length = settings.nickname.max_length,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
