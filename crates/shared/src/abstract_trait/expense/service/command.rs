use crate::{
    domain::{
        requests::{CreateExpenseRequest, UpdateExpenseRequest},
        responses::{ApiResponse, ExpenseResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynExpenseCommandService = Arc<dyn ExpenseCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ExpenseCommandServiceTrait {
    async fn create(
        &self,
        request: &CreateExpenseRequest,
    ) -> Result<ApiResponse<ExpenseResponse>, ServiceError>;

    async fn update(
        &self,
        id: i64,
        request: &UpdateExpenseRequest,
    ) -> Result<ApiResponse<ExpenseResponse>, ServiceError>;

    async fn delete(&self, id: i64, user_id: i64) -> Result<ApiResponse<String>, ServiceError>;
}
