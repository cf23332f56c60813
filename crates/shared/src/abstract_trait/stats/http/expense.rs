use crate::{domain::responses::ExpenseResponse, errors::ServiceError};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

pub type DynExpenseRemoteClient = Arc<dyn ExpenseRemoteClientTrait + Send + Sync>;

/// Typed view of the expense service's public endpoints, as consumed by the
/// statistics aggregator.
#[async_trait]
pub trait ExpenseRemoteClientTrait {
    async fn get_total_expenses(&self, user_id: i64) -> Result<f64, ServiceError>;

    async fn get_expenses_by_date_range(
        &self,
        user_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<ExpenseResponse>, ServiceError>;
}
