use crate::{
    domain::requests::CreateExpenseRequest, errors::RepositoryError, model::expense::ExpenseModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynExpenseCommandRepository = Arc<dyn ExpenseCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ExpenseCommandRepositoryTrait {
    async fn create(&self, req: &CreateExpenseRequest) -> Result<ExpenseModel, RepositoryError>;

    /// Writes every field of the already-merged record, keyed by
    /// `(expense_id, user_id)`.
    async fn update(&self, expense: &ExpenseModel) -> Result<ExpenseModel, RepositoryError>;

    async fn delete(&self, id: i64, user_id: i64) -> Result<(), RepositoryError>;
}
