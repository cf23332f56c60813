use anyhow::{Context, Result};
use dotenv::dotenv;
use income::{handler::AppRouter, state::AppState};
use shared::{
    config::{Config, create_pool},
    utils::Logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _logger = Logger::new("income", config.is_dev);

    let pool = create_pool(&config.database_url).await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let state = AppState::new(pool)
        .await
        .context("Failed to create AppState")?;

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server...");

    Ok(())
}
