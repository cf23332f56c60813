use anyhow::Result;
use shared::{
    abstract_trait::user::{
        repository::{command::DynUserCommandRepository, query::DynUserQueryRepository},
        service::{command::DynUserCommandService, query::DynUserQueryService},
    },
    config::ConnectionPool,
    repository::user::{command::UserCommandRepository, query::UserQueryRepository},
    service::user::{UserCommandService, UserQueryService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub user_query: DynUserQueryService,
    pub user_command: DynUserCommandService,
}

impl DependenciesInject {
    pub async fn new(db: ConnectionPool) -> Result<Self> {
        let query_repo = Arc::new(UserQueryRepository::new(db.clone())) as DynUserQueryRepository;
        let command_repo =
            Arc::new(UserCommandRepository::new(db.clone())) as DynUserCommandRepository;

        let user_query =
            Arc::new(UserQueryService::new(query_repo.clone()).await) as DynUserQueryService;
        let user_command =
            Arc::new(UserCommandService::new(query_repo.clone(), command_repo.clone()).await)
                as DynUserCommandService;

        Ok(Self {
            user_query,
            user_command,
        })
    }
}
