use crate::{
    abstract_trait::income::repository::command::IncomeCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::CreateIncomeRequest, errors::RepositoryError,
    model::income::IncomeModel,
};
use async_trait::async_trait;
use tracing::error;

pub struct IncomeCommandRepository {
    db: ConnectionPool,
}

impl IncomeCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IncomeCommandRepositoryTrait for IncomeCommandRepository {
    async fn create(&self, req: &CreateIncomeRequest) -> Result<IncomeModel, RepositoryError> {
        let income = sqlx::query_as::<_, IncomeModel>(
            r#"
            INSERT INTO incomes (title, description, category, amount, date, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING income_id, title, description, category, amount, date, user_id
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(&req.category)
        .bind(req.amount)
        .bind(req.date)
        .bind(req.user_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create income for user {}: {e:?}", req.user_id);
            RepositoryError::Sqlx(e)
        })?;

        Ok(income)
    }

    async fn update(&self, income: &IncomeModel) -> Result<IncomeModel, RepositoryError> {
        let updated = sqlx::query_as::<_, IncomeModel>(
            r#"
            UPDATE incomes
            SET title = $3, description = $4, category = $5, amount = $6, date = $7
            WHERE income_id = $1 AND user_id = $2
            RETURNING income_id, title, description, category, amount, date, user_id
            "#,
        )
        .bind(income.income_id)
        .bind(income.user_id)
        .bind(&income.title)
        .bind(&income.description)
        .bind(&income.category)
        .bind(income.amount)
        .bind(income.date)
        .fetch_one(&self.db)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                error!(
                    "❌ Income id={} not found for user {}",
                    income.income_id, income.user_id
                );
                RepositoryError::NotFound
            }
            _ => {
                error!("❌ Failed to update income id={}: {e:?}", income.income_id);
                RepositoryError::Sqlx(e)
            }
        })?;

        Ok(updated)
    }

    async fn delete(&self, id: i64, user_id: i64) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            DELETE FROM incomes
            WHERE income_id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete income id={id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(())
    }
}
