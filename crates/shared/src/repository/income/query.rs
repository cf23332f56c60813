use crate::{
    abstract_trait::income::repository::query::IncomeQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllIncomes, errors::RepositoryError, model::income::IncomeModel,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::Row;
use tracing::{error, info};

pub struct IncomeQueryRepository {
    db: ConnectionPool,
}

impl IncomeQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IncomeQueryRepositoryTrait for IncomeQueryRepository {
    async fn find_by_user(
        &self,
        user_id: i64,
        request: &FindAllIncomes,
    ) -> Result<(Vec<IncomeModel>, i64), RepositoryError> {
        info!(
            "🔍 Fetching incomes for user {user_id} - page: {}, size: {}",
            request.page, request.page_size
        );

        let limit = request.page_size.max(1);
        let offset = request.page.max(0) * limit;

        let rows = sqlx::query(
            r#"
            SELECT
                income_id,
                title,
                description,
                category,
                amount,
                date,
                user_id,
                COUNT(*) OVER() AS total_count
            FROM incomes
            WHERE user_id = $1
            ORDER BY date DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch incomes for user {user_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        let total = rows
            .first()
            .map(|r| r.get::<i64, _>("total_count"))
            .unwrap_or(0);

        let result = rows
            .into_iter()
            .map(|r| IncomeModel {
                income_id: r.get("income_id"),
                title: r.get("title"),
                description: r.get("description"),
                category: r.get("category"),
                amount: r.get("amount"),
                date: r.get("date"),
                user_id: r.get("user_id"),
            })
            .collect::<Vec<_>>();

        info!("✅ Retrieved {} incomes", result.len());

        Ok((result, total))
    }

    async fn find_by_id_and_user(
        &self,
        id: i64,
        user_id: i64,
    ) -> Result<IncomeModel, RepositoryError> {
        info!("🔍 Finding income id={id} for user {user_id}");

        let income = sqlx::query_as::<_, IncomeModel>(
            r#"
            SELECT income_id, title, description, category, amount, date, user_id
            FROM incomes
            WHERE income_id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to query income id={id}: {e:?}");
            RepositoryError::from(e)
        })?;

        match income {
            Some(income) => Ok(income),
            None => {
                error!("❌ Income id={id} not found for user {user_id}");
                Err(RepositoryError::NotFound)
            }
        }
    }

    async fn sum_amount_by_user(&self, user_id: i64) -> Result<Option<f64>, RepositoryError> {
        info!("🔍 Summing income amounts for user {user_id}");

        let row = sqlx::query(
            r#"
            SELECT SUM(amount) AS total
            FROM incomes
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to sum incomes for user {user_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(row.get::<Option<f64>, _>("total"))
    }

    async fn find_by_user_and_date_between(
        &self,
        user_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<IncomeModel>, RepositoryError> {
        info!("🔍 Fetching incomes for user {user_id} between {start_date} and {end_date}");

        let incomes = sqlx::query_as::<_, IncomeModel>(
            r#"
            SELECT income_id, title, description, category, amount, date, user_id
            FROM incomes
            WHERE user_id = $1 AND date BETWEEN $2 AND $3
            ORDER BY date DESC
            "#,
        )
        .bind(user_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch incomes by date range: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved {} incomes in range", incomes.len());

        Ok(incomes)
    }
}
