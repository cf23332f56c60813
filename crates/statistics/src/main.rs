use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{
    config::{Config, RemoteClientConfig, create_pool},
    utils::Logger,
};
use statistics::{handler::AppRouter, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;
    let remote_config = RemoteClientConfig::init().context("Failed to load remote client config")?;

    let _logger = Logger::new("statistics", config.is_dev);

    let pool = create_pool(&config.database_url).await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let state = AppState::new(pool, remote_config)
        .await
        .context("Failed to create AppState")?;

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server...");

    Ok(())
}
