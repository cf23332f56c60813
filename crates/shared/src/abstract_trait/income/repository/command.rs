use crate::{
    domain::requests::CreateIncomeRequest, errors::RepositoryError, model::income::IncomeModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynIncomeCommandRepository = Arc<dyn IncomeCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait IncomeCommandRepositoryTrait {
    async fn create(&self, req: &CreateIncomeRequest) -> Result<IncomeModel, RepositoryError>;

    /// Writes every field of the already-merged record, keyed by
    /// `(income_id, user_id)`.
    async fn update(&self, income: &IncomeModel) -> Result<IncomeModel, RepositoryError>;

    async fn delete(&self, id: i64, user_id: i64) -> Result<(), RepositoryError>;
}
