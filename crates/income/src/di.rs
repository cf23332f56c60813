use anyhow::Result;
use shared::{
    abstract_trait::income::{
        repository::{command::DynIncomeCommandRepository, query::DynIncomeQueryRepository},
        service::{command::DynIncomeCommandService, query::DynIncomeQueryService},
    },
    config::ConnectionPool,
    repository::income::{command::IncomeCommandRepository, query::IncomeQueryRepository},
    service::income::{IncomeCommandService, IncomeQueryService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub income_query: DynIncomeQueryService,
    pub income_command: DynIncomeCommandService,
}

impl DependenciesInject {
    pub async fn new(db: ConnectionPool) -> Result<Self> {
        let query_repo =
            Arc::new(IncomeQueryRepository::new(db.clone())) as DynIncomeQueryRepository;
        let command_repo =
            Arc::new(IncomeCommandRepository::new(db.clone())) as DynIncomeCommandRepository;

        let income_query =
            Arc::new(IncomeQueryService::new(query_repo.clone()).await) as DynIncomeQueryService;
        let income_command =
            Arc::new(IncomeCommandService::new(query_repo.clone(), command_repo.clone()).await)
                as DynIncomeCommandService;

        Ok(Self {
            income_query,
            income_command,
        })
    }
}
