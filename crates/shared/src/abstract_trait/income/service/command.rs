use crate::{
    domain::{
        requests::{CreateIncomeRequest, UpdateIncomeRequest},
        responses::{ApiResponse, IncomeResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynIncomeCommandService = Arc<dyn IncomeCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait IncomeCommandServiceTrait {
    async fn create(
        &self,
        request: &CreateIncomeRequest,
    ) -> Result<ApiResponse<IncomeResponse>, ServiceError>;

    async fn update(
        &self,
        id: i64,
        request: &UpdateIncomeRequest,
    ) -> Result<ApiResponse<IncomeResponse>, ServiceError>;

    async fn delete(&self, id: i64, user_id: i64) -> Result<ApiResponse<String>, ServiceError>;
}
