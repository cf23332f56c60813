use crate::{
    domain::responses::{ApiResponse, UserResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryService = Arc<dyn UserQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError>;

    async fn find_by_id(&self, user_id: i64) -> Result<ApiResponse<UserResponse>, ServiceError>;
}
