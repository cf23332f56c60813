use crate::{
    domain::{
        requests::{FindAllIncomes, FindIncomesByDateRange},
        responses::{ApiResponse, ApiResponsePagination, IncomeResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynIncomeQueryService = Arc<dyn IncomeQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait IncomeQueryServiceTrait {
    async fn find_all(
        &self,
        user_id: i64,
        request: &FindAllIncomes,
    ) -> Result<ApiResponsePagination<Vec<IncomeResponse>>, ServiceError>;

    async fn find_by_id(
        &self,
        id: i64,
        user_id: i64,
    ) -> Result<ApiResponse<IncomeResponse>, ServiceError>;

    async fn get_total(&self, user_id: i64) -> Result<ApiResponse<f64>, ServiceError>;

    async fn find_by_date_range(
        &self,
        request: &FindIncomesByDateRange,
    ) -> Result<ApiResponse<Vec<IncomeResponse>>, ServiceError>;
}
