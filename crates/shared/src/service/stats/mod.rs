use crate::{
    abstract_trait::stats::{
        http::{DynExpenseRemoteClient, DynIncomeRemoteClient},
        repository::DynStatsRepository,
        service::StatsServiceTrait,
    },
    domain::{
        requests::UpsertStatsRequest,
        responses::{ApiResponse, GraphResponse, StatsResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use chrono::{Duration, Local};
use tracing::{info, warn};

pub struct StatsService {
    expense_client: DynExpenseRemoteClient,
    income_client: DynIncomeRemoteClient,
    stats: DynStatsRepository,
}

impl StatsService {
    pub async fn new(
        expense_client: DynExpenseRemoteClient,
        income_client: DynIncomeRemoteClient,
        stats: DynStatsRepository,
    ) -> Self {
        Self {
            expense_client,
            income_client,
            stats,
        }
    }
}

#[async_trait]
impl StatsServiceTrait for StatsService {
    async fn get_stats(&self, user_id: i64) -> Result<ApiResponse<StatsResponse>, ServiceError> {
        info!("📊 Computing stats for user {user_id}");

        // Both totals are load-bearing for the balance check, so a failed
        // remote call fails the whole operation rather than defaulting to 0.
        let total_income = self.income_client.get_total_income(user_id).await?;
        let total_expense = self.expense_client.get_total_expenses(user_id).await?;

        let balance = total_income - total_expense;

        if balance < 0.0 {
            warn!("❌ Negative balance {balance} for user {user_id}, snapshot not persisted");
            return Err(ServiceError::NegativeBalance(
                "The user's balance has fallen below zero.".to_string(),
            ));
        }

        let snapshot = self
            .stats
            .upsert(&UpsertStatsRequest {
                user_id,
                total_income,
                total_expense,
                balance,
            })
            .await?;

        info!("✅ Stats computed for user {user_id}: balance={balance}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Stats computed successfully".to_string(),
            data: StatsResponse::from(snapshot),
        })
    }

    async fn get_chart_data(
        &self,
        user_id: i64,
    ) -> Result<ApiResponse<GraphResponse>, ServiceError> {
        let end_date = Local::now().date_naive();
        let start_date = end_date - Duration::days(30);

        info!("📈 Building chart data for user {user_id} over [{start_date}, {end_date}]");

        // Presentation-only data: each branch degrades independently to an
        // empty series instead of failing the request.
        let expense_list = match self
            .expense_client
            .get_expenses_by_date_range(user_id, start_date, end_date)
            .await
        {
            Ok(list) => list,
            Err(e) => {
                warn!("⚠️ Expense range query failed for user {user_id}: {e}");
                Vec::new()
            }
        };

        let income_list = match self
            .income_client
            .get_incomes_by_date_range(user_id, start_date, end_date)
            .await
        {
            Ok(list) => list,
            Err(e) => {
                warn!("⚠️ Income range query failed for user {user_id}: {e}");
                Vec::new()
            }
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Chart data retrieved successfully".to_string(),
            data: GraphResponse {
                expense_list,
                income_list,
            },
        })
    }
}
