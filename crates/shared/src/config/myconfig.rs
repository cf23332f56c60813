use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub is_dev: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("Missing env: DATABASE_URL")?;
        let run_migrations_str =
            std::env::var("RUN_MIGRATIONS").context("Missing env: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing env: PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{other}'",
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let is_dev = std::env::var("APP_ENV")
            .map(|env| env != "production")
            .unwrap_or(true);

        Ok(Self {
            database_url,
            run_migrations,
            port,
            is_dev,
        })
    }
}

/// Base addresses of the peer services the statistics service aggregates
/// from. Service discovery is out of scope, so each dependency is a plain
/// resolvable URL injected through the environment.
#[derive(Debug, Clone)]
pub struct RemoteClientConfig {
    pub expense_base_url: String,
    pub income_base_url: String,
}

impl RemoteClientConfig {
    pub fn init() -> Result<Self> {
        let expense_base_url =
            std::env::var("EXPENSE_SERVICE_URL").context("Missing env: EXPENSE_SERVICE_URL")?;
        let income_base_url =
            std::env::var("INCOME_SERVICE_URL").context("Missing env: INCOME_SERVICE_URL")?;

        Ok(Self {
            expense_base_url,
            income_base_url,
        })
    }
}
