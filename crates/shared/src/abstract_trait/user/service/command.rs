use crate::{
    domain::{
        requests::{RegisterUserRequest, UpdateUserRequest},
        responses::{ApiResponse, UserResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserCommandService = Arc<dyn UserCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandServiceTrait {
    async fn register(
        &self,
        request: &RegisterUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;

    async fn update(
        &self,
        user_id: i64,
        request: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;

    async fn delete(&self, user_id: i64) -> Result<ApiResponse<String>, ServiceError>;
}
