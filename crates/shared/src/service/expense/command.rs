use super::EXPENSE_NOT_FOUND_MESSAGE;
use crate::{
    abstract_trait::expense::{
        repository::{command::DynExpenseCommandRepository, query::DynExpenseQueryRepository},
        service::command::ExpenseCommandServiceTrait,
    },
    domain::{
        requests::{CreateExpenseRequest, UpdateExpenseRequest},
        responses::{ApiResponse, ExpenseResponse},
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
    model::expense::ExpenseModel,
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct ExpenseCommandService {
    query: DynExpenseQueryRepository,
    command: DynExpenseCommandRepository,
}

impl ExpenseCommandService {
    pub async fn new(
        query: DynExpenseQueryRepository,
        command: DynExpenseCommandRepository,
    ) -> Self {
        Self { query, command }
    }
}

/// Partial update: only fields present in the request overwrite the stored
/// record.
fn merge(mut expense: ExpenseModel, request: &UpdateExpenseRequest) -> ExpenseModel {
    if let Some(title) = &request.title {
        expense.title = title.clone();
    }
    if let Some(description) = &request.description {
        expense.description = Some(description.clone());
    }
    if let Some(category) = &request.category {
        expense.category = category.clone();
    }
    if let Some(amount) = request.amount {
        expense.amount = amount;
    }
    if let Some(date) = request.date {
        expense.date = date;
    }
    expense
}

#[async_trait]
impl ExpenseCommandServiceTrait for ExpenseCommandService {
    async fn create(
        &self,
        request: &CreateExpenseRequest,
    ) -> Result<ApiResponse<ExpenseResponse>, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(error_msg));
        }

        info!("🆕 Creating expense '{}' for user {}", request.title, request.user_id);

        let expense = self.command.create(request).await?;

        let response = ExpenseResponse::from(expense);

        info!("✅ Expense created with id={}", response.id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Expense created successfully".to_string(),
            data: response,
        })
    }

    async fn update(
        &self,
        id: i64,
        request: &UpdateExpenseRequest,
    ) -> Result<ApiResponse<ExpenseResponse>, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(error_msg));
        }

        info!("✏️ Updating expense id={id} for user {}", request.user_id);

        // The lookup is keyed on the body's user id, not the path's.
        let existing = self
            .query
            .find_by_id_and_user(id, request.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    ServiceError::NotFound(EXPENSE_NOT_FOUND_MESSAGE.to_string())
                }
                other => ServiceError::Repo(other),
            })?;

        let merged = merge(existing, request);

        let updated = self.command.update(&merged).await.map_err(|e| match e {
            RepositoryError::NotFound => {
                ServiceError::NotFound(EXPENSE_NOT_FOUND_MESSAGE.to_string())
            }
            other => ServiceError::Repo(other),
        })?;

        info!("✅ Expense id={id} updated");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Expense updated successfully".to_string(),
            data: ExpenseResponse::from(updated),
        })
    }

    async fn delete(&self, id: i64, user_id: i64) -> Result<ApiResponse<String>, ServiceError> {
        info!("🗑️ Deleting expense id={id} for user {user_id}");

        self.query
            .find_by_id_and_user(id, user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    ServiceError::NotFound(EXPENSE_NOT_FOUND_MESSAGE.to_string())
                }
                other => ServiceError::Repo(other),
            })?;

        self.command.delete(id, user_id).await?;

        info!("✅ Expense id={id} deleted");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Expense deleted successfully".to_string(),
            data: "Expense Deleted Successfully".to_string(),
        })
    }
}
