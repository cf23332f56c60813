use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use shared::config::{ConnectionPool, RemoteClientConfig};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(pool: ConnectionPool, remote_config: RemoteClientConfig) -> Result<Self> {
        let di_container = DependenciesInject::new(pool, remote_config)
            .await
            .context("Failed to initialize dependency injection container")?;

        Ok(Self { di_container })
    }
}
