use super::user_not_found;
use crate::{
    abstract_trait::user::{
        repository::{command::DynUserCommandRepository, query::DynUserQueryRepository},
        service::command::UserCommandServiceTrait,
    },
    domain::{
        requests::{RegisterUserRequest, UpdateUserRequest},
        responses::{ApiResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError, validation_error_map},
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct UserCommandService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
}

impl UserCommandService {
    pub async fn new(query: DynUserQueryRepository, command: DynUserCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl UserCommandServiceTrait for UserCommandService {
    async fn register(
        &self,
        request: &RegisterUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            let errors = validation_error_map(&validation_errors);
            error!("Validation failed: {errors:?}");
            return Err(ServiceError::FieldErrors(errors));
        }

        info!("🆕 Registering user: {}", request.user_name);

        let name_taken = self
            .query
            .find_by_user_name(&request.user_name)
            .await?
            .is_some();
        let email_taken = self.query.find_by_email(&request.email).await?.is_some();

        if name_taken || email_taken {
            error!(
                "❌ Registration rejected, username or email already exists: {}",
                request.user_name
            );
            return Err(ServiceError::Conflict(
                "User with the same username or email already exists".to_string(),
            ));
        }

        let user = self.command.create(request).await?;

        info!("✅ User registered with id={}", user.user_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User registered successfully".to_string(),
            data: UserResponse::from(user),
        })
    }

    async fn update(
        &self,
        user_id: i64,
        request: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            let errors = validation_error_map(&validation_errors);
            error!("Validation failed: {errors:?}");
            return Err(ServiceError::FieldErrors(errors));
        }

        info!("✏️ Updating user {user_id}");

        // Full overwrite of all three fields.
        let user = self
            .command
            .update(user_id, request)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ServiceError::NotFound(user_not_found(user_id)),
                other => ServiceError::Repo(other),
            })?;

        info!("✅ User {user_id} updated");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User updated successfully".to_string(),
            data: UserResponse::from(user),
        })
    }

    async fn delete(&self, user_id: i64) -> Result<ApiResponse<String>, ServiceError> {
        info!("🗑️ Deleting user {user_id}");

        self.query.find_by_id(user_id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound(user_not_found(user_id)),
            other => ServiceError::Repo(other),
        })?;

        self.command.delete(user_id).await?;

        info!("✅ User {user_id} deleted");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User deleted successfully".to_string(),
            data: "User Deleted Successfully".to_string(),
        })
    }
}
