use crate::{
    domain::requests::FindAllExpenses, errors::RepositoryError, model::expense::ExpenseModel,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

pub type DynExpenseQueryRepository = Arc<dyn ExpenseQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ExpenseQueryRepositoryTrait {
    async fn find_by_user(
        &self,
        user_id: i64,
        request: &FindAllExpenses,
    ) -> Result<(Vec<ExpenseModel>, i64), RepositoryError>;

    async fn find_by_id_and_user(
        &self,
        id: i64,
        user_id: i64,
    ) -> Result<ExpenseModel, RepositoryError>;

    async fn sum_amount_by_user(&self, user_id: i64) -> Result<Option<f64>, RepositoryError>;

    async fn find_by_user_and_date_between(
        &self,
        user_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<ExpenseModel>, RepositoryError>;
}
