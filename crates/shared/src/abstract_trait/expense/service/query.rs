use crate::{
    domain::{
        requests::{FindAllExpenses, FindExpensesByDateRange},
        responses::{ApiResponse, ApiResponsePagination, ExpenseResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynExpenseQueryService = Arc<dyn ExpenseQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ExpenseQueryServiceTrait {
    async fn find_all(
        &self,
        user_id: i64,
        request: &FindAllExpenses,
    ) -> Result<ApiResponsePagination<Vec<ExpenseResponse>>, ServiceError>;

    async fn find_by_id(
        &self,
        id: i64,
        user_id: i64,
    ) -> Result<ApiResponse<ExpenseResponse>, ServiceError>;

    async fn get_total(&self, user_id: i64) -> Result<ApiResponse<f64>, ServiceError>;

    async fn find_by_date_range(
        &self,
        request: &FindExpensesByDateRange,
    ) -> Result<ApiResponse<Vec<ExpenseResponse>>, ServiceError>;
}
