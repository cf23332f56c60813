use anyhow::Result;
use shared::{
    abstract_trait::expense::{
        repository::{command::DynExpenseCommandRepository, query::DynExpenseQueryRepository},
        service::{command::DynExpenseCommandService, query::DynExpenseQueryService},
    },
    config::ConnectionPool,
    repository::expense::{command::ExpenseCommandRepository, query::ExpenseQueryRepository},
    service::expense::{ExpenseCommandService, ExpenseQueryService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub expense_query: DynExpenseQueryService,
    pub expense_command: DynExpenseCommandService,
}

impl DependenciesInject {
    pub async fn new(db: ConnectionPool) -> Result<Self> {
        let query_repo =
            Arc::new(ExpenseQueryRepository::new(db.clone())) as DynExpenseQueryRepository;
        let command_repo =
            Arc::new(ExpenseCommandRepository::new(db.clone())) as DynExpenseCommandRepository;

        let expense_query =
            Arc::new(ExpenseQueryService::new(query_repo.clone()).await) as DynExpenseQueryService;
        let expense_command =
            Arc::new(ExpenseCommandService::new(query_repo.clone(), command_repo.clone()).await)
                as DynExpenseCommandService;

        Ok(Self {
            expense_query,
            expense_command,
        })
    }
}
