use super::INCOME_NOT_FOUND_MESSAGE;
use crate::{
    abstract_trait::income::{
        repository::{command::DynIncomeCommandRepository, query::DynIncomeQueryRepository},
        service::command::IncomeCommandServiceTrait,
    },
    domain::{
        requests::{CreateIncomeRequest, UpdateIncomeRequest},
        responses::{ApiResponse, IncomeResponse},
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
    model::income::IncomeModel,
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct IncomeCommandService {
    query: DynIncomeQueryRepository,
    command: DynIncomeCommandRepository,
}

impl IncomeCommandService {
    pub async fn new(
        query: DynIncomeQueryRepository,
        command: DynIncomeCommandRepository,
    ) -> Self {
        Self { query, command }
    }
}

/// Partial update: only fields present in the request overwrite the stored
/// record.
fn merge(mut income: IncomeModel, request: &UpdateIncomeRequest) -> IncomeModel {
    if let Some(title) = &request.title {
        income.title = title.clone();
    }
    if let Some(description) = &request.description {
        income.description = Some(description.clone());
    }
    if let Some(category) = &request.category {
        income.category = category.clone();
    }
    if let Some(amount) = request.amount {
        income.amount = amount;
    }
    if let Some(date) = request.date {
        income.date = date;
    }
    income
}

#[async_trait]
impl IncomeCommandServiceTrait for IncomeCommandService {
    async fn create(
        &self,
        request: &CreateIncomeRequest,
    ) -> Result<ApiResponse<IncomeResponse>, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(error_msg));
        }

        info!("🆕 Creating income '{}' for user {}", request.title, request.user_id);

        let income = self.command.create(request).await?;

        let response = IncomeResponse::from(income);

        info!("✅ Income created with id={}", response.id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Income created successfully".to_string(),
            data: response,
        })
    }

    async fn update(
        &self,
        id: i64,
        request: &UpdateIncomeRequest,
    ) -> Result<ApiResponse<IncomeResponse>, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(error_msg));
        }

        info!("✏️ Updating income id={id} for user {}", request.user_id);

        // The lookup is keyed on the body's user id, not the path's.
        let existing = self
            .query
            .find_by_id_and_user(id, request.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    ServiceError::NotFound(INCOME_NOT_FOUND_MESSAGE.to_string())
                }
                other => ServiceError::Repo(other),
            })?;

        let merged = merge(existing, request);

        let updated = self.command.update(&merged).await.map_err(|e| match e {
            RepositoryError::NotFound => {
                ServiceError::NotFound(INCOME_NOT_FOUND_MESSAGE.to_string())
            }
            other => ServiceError::Repo(other),
        })?;

        info!("✅ Income id={id} updated");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Income updated successfully".to_string(),
            data: IncomeResponse::from(updated),
        })
    }

    async fn delete(&self, id: i64, user_id: i64) -> Result<ApiResponse<String>, ServiceError> {
        info!("🗑️ Deleting income id={id} for user {user_id}");

        self.query
            .find_by_id_and_user(id, user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    ServiceError::NotFound(INCOME_NOT_FOUND_MESSAGE.to_string())
                }
                other => ServiceError::Repo(other),
            })?;

        self.command.delete(id, user_id).await?;

        info!("✅ Income id={id} deleted");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Income deleted successfully".to_string(),
            data: "Income Deleted Successfully".to_string(),
        })
    }
}
