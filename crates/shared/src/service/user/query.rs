use super::user_not_found;
use crate::{
    abstract_trait::user::{
        repository::query::DynUserQueryRepository, service::query::UserQueryServiceTrait,
    },
    domain::responses::{ApiResponse, UserResponse},
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct UserQueryService {
    query: DynUserQueryRepository,
}

impl UserQueryService {
    pub async fn new(query: DynUserQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl UserQueryServiceTrait for UserQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError> {
        info!("🔍 Fetching all users");

        let users = self.query.find_all().await.map_err(|e| {
            error!("❌ Failed to fetch users: {e}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Found {} users", users.len());

        let data: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Users retrieved successfully".to_string(),
            data,
        })
    }

    async fn find_by_id(&self, user_id: i64) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("🔍 Finding user by ID: {user_id}");

        let user = self.query.find_by_id(user_id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound(user_not_found(user_id)),
            other => ServiceError::Repo(other),
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User retrieved successfully".to_string(),
            data: UserResponse::from(user),
        })
    }
}
