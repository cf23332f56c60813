use crate::{domain::responses::IncomeResponse, errors::ServiceError};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

pub type DynIncomeRemoteClient = Arc<dyn IncomeRemoteClientTrait + Send + Sync>;

#[async_trait]
pub trait IncomeRemoteClientTrait {
    async fn get_total_income(&self, user_id: i64) -> Result<f64, ServiceError>;

    async fn get_incomes_by_date_range(
        &self,
        user_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<IncomeResponse>, ServiceError>;
}
