use crate::{
    domain::requests::{RegisterUserRequest, UpdateUserRequest},
    errors::RepositoryError,
    model::user::UserModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create(&self, req: &RegisterUserRequest) -> Result<UserModel, RepositoryError>;

    async fn update(
        &self,
        user_id: i64,
        req: &UpdateUserRequest,
    ) -> Result<UserModel, RepositoryError>;

    async fn delete(&self, user_id: i64) -> Result<(), RepositoryError>;
}
