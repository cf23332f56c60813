use super::EXPENSE_NOT_FOUND_MESSAGE;
use crate::{
    abstract_trait::expense::{
        repository::query::DynExpenseQueryRepository, service::query::ExpenseQueryServiceTrait,
    },
    domain::{
        requests::{FindAllExpenses, FindExpensesByDateRange},
        responses::{ApiResponse, ApiResponsePagination, ExpenseResponse, Pagination},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ExpenseQueryService {
    query: DynExpenseQueryRepository,
}

impl ExpenseQueryService {
    pub async fn new(query: DynExpenseQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ExpenseQueryServiceTrait for ExpenseQueryService {
    async fn find_all(
        &self,
        user_id: i64,
        request: &FindAllExpenses,
    ) -> Result<ApiResponsePagination<Vec<ExpenseResponse>>, ServiceError> {
        // Page number and size come from the caller, the sort never does.
        let page = request.page.max(0);
        let page_size = if request.page_size > 0 {
            request.page_size
        } else {
            10
        };

        info!("🔍 Listing expenses for user {user_id} | page: {page}, size: {page_size}");

        let effective = FindAllExpenses { page, page_size };

        let (expenses, total_items) =
            self.query
                .find_by_user(user_id, &effective)
                .await
                .map_err(|e| {
                    error!("❌ Failed to list expenses for user {user_id}: {e}");
                    ServiceError::Repo(e)
                })?;

        let total_pages = (total_items as f64 / page_size as f64).ceil() as i64;

        let data: Vec<ExpenseResponse> = expenses.into_iter().map(ExpenseResponse::from).collect();

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Expenses retrieved successfully".to_string(),
            data,
            pagination: Pagination {
                page,
                page_size,
                total_items,
                total_pages,
            },
        })
    }

    async fn find_by_id(
        &self,
        id: i64,
        user_id: i64,
    ) -> Result<ApiResponse<ExpenseResponse>, ServiceError> {
        info!("🔍 Finding expense id={id} for user {user_id}");

        let expense = self
            .query
            .find_by_id_and_user(id, user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    ServiceError::NotFound(EXPENSE_NOT_FOUND_MESSAGE.to_string())
                }
                other => ServiceError::Repo(other),
            })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Expense retrieved successfully".to_string(),
            data: ExpenseResponse::from(expense),
        })
    }

    async fn get_total(&self, user_id: i64) -> Result<ApiResponse<f64>, ServiceError> {
        info!("🔍 Computing total expenses for user {user_id}");

        let total = self.query.sum_amount_by_user(user_id).await?;

        // A user with zero records yields a NULL sum, which is an error
        // here rather than 0.
        let total = total.ok_or_else(|| {
            error!("❌ No expenses found for user {user_id}");
            ServiceError::NotFound(EXPENSE_NOT_FOUND_MESSAGE.to_string())
        })?;

        info!("✅ Total expenses for user {user_id}: {total}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Total expenses retrieved successfully".to_string(),
            data: total,
        })
    }

    async fn find_by_date_range(
        &self,
        request: &FindExpensesByDateRange,
    ) -> Result<ApiResponse<Vec<ExpenseResponse>>, ServiceError> {
        info!(
            "🔍 Fetching expenses for user {} in [{}, {}]",
            request.user_id, request.start_date, request.end_date
        );

        let expenses = self
            .query
            .find_by_user_and_date_between(request.user_id, request.start_date, request.end_date)
            .await?;

        if expenses.is_empty() {
            error!(
                "❌ No expenses in range [{}, {}] for user {}",
                request.start_date, request.end_date, request.user_id
            );
            return Err(ServiceError::NotFound(
                "No expenses found for the given date range".to_string(),
            ));
        }

        let data: Vec<ExpenseResponse> = expenses.into_iter().map(ExpenseResponse::from).collect();

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Expenses retrieved successfully".to_string(),
            data,
        })
    }
}
