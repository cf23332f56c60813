use crate::{
    abstract_trait::expense::repository::query::ExpenseQueryRepositoryTrait,
    config::ConnectionPool, domain::requests::FindAllExpenses, errors::RepositoryError,
    model::expense::ExpenseModel,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::Row;
use tracing::{error, info};

pub struct ExpenseQueryRepository {
    db: ConnectionPool,
}

impl ExpenseQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExpenseQueryRepositoryTrait for ExpenseQueryRepository {
    async fn find_by_user(
        &self,
        user_id: i64,
        request: &FindAllExpenses,
    ) -> Result<(Vec<ExpenseModel>, i64), RepositoryError> {
        info!(
            "🔍 Fetching expenses for user {user_id} - page: {}, size: {}",
            request.page, request.page_size
        );

        let limit = request.page_size.max(1);
        let offset = request.page.max(0) * limit;

        let rows = sqlx::query(
            r#"
            SELECT
                expense_id,
                title,
                description,
                category,
                amount,
                date,
                user_id,
                COUNT(*) OVER() AS total_count
            FROM expenses
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
            error!("❌ Failed to fetch expenses for user {user_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        let total = rows
            .first()
            .map(|r| r.get::<i64, _>("total_count"))
            .unwrap_or(0);

        let result = rows
            .into_iter()
            .map(|r| ExpenseModel {
                expense_id: r.get("expense_id"),
                title: r.get("title"),
                description: r.get("description"),
                category: r.get("category"),
                amount: r.get("amount"),
                date: r.get("date"),
                user_id: r.get("user_id"),
            })
            .collect::<Vec<_>>();

        info!("✅ Retrieved {} expenses", result.len());

        Ok((result, total))
    }

    async fn find_by_id_and_user(
        &self,
        id: i64,
        user_id: i64,
    ) -> Result<ExpenseModel, RepositoryError> {
        info!("🔍 Finding expense id={id} for user {user_id}");

        let expense = sqlx::query_as::<_, ExpenseModel>(
            r#"
            SELECT expense_id, title, description, category, amount, date, user_id
            FROM expenses
            WHERE expense_id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to query expense id={id}: {e:?}");
            RepositoryError::from(e)
        })?;

        match expense {
            Some(expense) => Ok(expense),
            None => {
                error!("❌ Expense id={id} not found for user {user_id}");
                Err(RepositoryError::NotFound)
            }
        }
    }

    async fn sum_amount_by_user(&self, user_id: i64) -> Result<Option<f64>, RepositoryError> {
        info!("🔍 Summing expense amounts for user {user_id}");

        let row = sqlx::query(
            r#"
            SELECT SUM(amount) AS total
            FROM expenses
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to sum expenses for user {user_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(row.get::<Option<f64>, _>("total"))
    }

    async fn find_by_user_and_date_between(
        &self,
        user_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<ExpenseModel>, RepositoryError> {
        info!("🔍 Fetching expenses for user {user_id} between {start_date} and {end_date}");

        let expenses = sqlx::query_as::<_, ExpenseModel>(
            r#"
            SELECT expense_id, title, description, category, amount, date, user_id
            FROM expenses
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
            error!("❌ Failed to fetch expenses by date range: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved {} expenses in range", expenses.len());

        Ok(expenses)
    }
}
