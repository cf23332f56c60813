use super::INCOME_NOT_FOUND_MESSAGE;
use crate::{
    abstract_trait::income::{
        repository::query::DynIncomeQueryRepository, service::query::IncomeQueryServiceTrait,
    },
    domain::{
        requests::{FindAllIncomes, FindIncomesByDateRange},
        responses::{ApiResponse, ApiResponsePagination, IncomeResponse, Pagination},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct IncomeQueryService {
    query: DynIncomeQueryRepository,
}

impl IncomeQueryService {
    pub async fn new(query: DynIncomeQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IncomeQueryServiceTrait for IncomeQueryService {
    async fn find_all(
        &self,
        user_id: i64,
        request: &FindAllIncomes,
    ) -> Result<ApiResponsePagination<Vec<IncomeResponse>>, ServiceError> {
        // Page number and size come from the caller, the sort never does.
        let page = request.page.max(0);
        let page_size = if request.page_size > 0 {
            request.page_size
        } else {
            10
        };

        info!("🔍 Listing incomes for user {user_id} | page: {page}, size: {page_size}");

        let effective = FindAllIncomes { page, page_size };

        let (incomes, total_items) =
            self.query
                .find_by_user(user_id, &effective)
                .await
                .map_err(|e| {
                    error!("❌ Failed to list incomes for user {user_id}: {e}");
                    ServiceError::Repo(e)
                })?;

        let total_pages = (total_items as f64 / page_size as f64).ceil() as i64;

        let data: Vec<IncomeResponse> = incomes.into_iter().map(IncomeResponse::from).collect();

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Incomes retrieved successfully".to_string(),
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
    ) -> Result<ApiResponse<IncomeResponse>, ServiceError> {
        info!("🔍 Finding income id={id} for user {user_id}");

        let income = self
            .query
            .find_by_id_and_user(id, user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    ServiceError::NotFound(INCOME_NOT_FOUND_MESSAGE.to_string())
                }
                other => ServiceError::Repo(other),
            })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Income retrieved successfully".to_string(),
            data: IncomeResponse::from(income),
        })
    }

    async fn get_total(&self, user_id: i64) -> Result<ApiResponse<f64>, ServiceError> {
        info!("🔍 Computing total income for user {user_id}");

        let total = self.query.sum_amount_by_user(user_id).await?;

        // A user with zero records yields a NULL sum, which is an error
        // here rather than 0.
        let total = total.ok_or_else(|| {
            error!("❌ No incomes found for user {user_id}");
            ServiceError::NotFound(INCOME_NOT_FOUND_MESSAGE.to_string())
        })?;

        info!("✅ Total income for user {user_id}: {total}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Total income retrieved successfully".to_string(),
            data: total,
        })
    }

    async fn find_by_date_range(
        &self,
        request: &FindIncomesByDateRange,
    ) -> Result<ApiResponse<Vec<IncomeResponse>>, ServiceError> {
        info!(
            "🔍 Fetching incomes for user {} in [{}, {}]",
            request.user_id, request.start_date, request.end_date
        );

        let incomes = self
            .query
            .find_by_user_and_date_between(request.user_id, request.start_date, request.end_date)
            .await?;

        if incomes.is_empty() {
            error!(
                "❌ No incomes in range [{}, {}] for user {}",
                request.start_date, request.end_date, request.user_id
            );
            return Err(ServiceError::NotFound(
                "No incomes found for the given date range".to_string(),
            ));
        }

        let data: Vec<IncomeResponse> = incomes.into_iter().map(IncomeResponse::from).collect();

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Incomes retrieved successfully".to_string(),
            data,
        })
    }
}
