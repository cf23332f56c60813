use crate::client::{ExpenseHttpClient, IncomeHttpClient};
use anyhow::Result;
use shared::{
    abstract_trait::stats::{
        http::{DynExpenseRemoteClient, DynIncomeRemoteClient},
        repository::DynStatsRepository,
        service::DynStatsService,
    },
    config::{ConnectionPool, RemoteClientConfig},
    repository::stats::StatsRepository,
    service::stats::StatsService,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub stats_service: DynStatsService,
}

impl DependenciesInject {
    pub async fn new(db: ConnectionPool, remote_config: RemoteClientConfig) -> Result<Self> {
        let http = reqwest::Client::new();

        let expense_client = Arc::new(ExpenseHttpClient::new(
            http.clone(),
            remote_config.expense_base_url,
        )) as DynExpenseRemoteClient;
        let income_client = Arc::new(IncomeHttpClient::new(
            http.clone(),
            remote_config.income_base_url,
        )) as DynIncomeRemoteClient;

        let stats_repo = Arc::new(StatsRepository::new(db.clone())) as DynStatsRepository;

        let stats_service =
            Arc::new(StatsService::new(expense_client, income_client, stats_repo).await)
                as DynStatsService;

        Ok(Self { stats_service })
    }
}
