use crate::{
    abstract_trait::expense::repository::command::ExpenseCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::CreateExpenseRequest, errors::RepositoryError,
    model::expense::ExpenseModel,
};
use async_trait::async_trait;
use tracing::error;

pub struct ExpenseCommandRepository {
    db: ConnectionPool,
}

impl ExpenseCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExpenseCommandRepositoryTrait for ExpenseCommandRepository {
    async fn create(&self, req: &CreateExpenseRequest) -> Result<ExpenseModel, RepositoryError> {
        let expense = sqlx::query_as::<_, ExpenseModel>(
            r#"
            INSERT INTO expenses (title, description, category, amount, date, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING expense_id, title, description, category, amount, date, user_id
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
            error!("❌ Failed to create expense for user {}: {e:?}", req.user_id);
            RepositoryError::Sqlx(e)
        })?;

        Ok(expense)
    }

    async fn update(&self, expense: &ExpenseModel) -> Result<ExpenseModel, RepositoryError> {
        let updated = sqlx::query_as::<_, ExpenseModel>(
            r#"
            UPDATE expenses
            SET title = $3, description = $4, category = $5, amount = $6, date = $7
            WHERE expense_id = $1 AND user_id = $2
            RETURNING expense_id, title, description, category, amount, date, user_id
            "#,
        )
        .bind(expense.expense_id)
        .bind(expense.user_id)
        .bind(&expense.title)
        .bind(&expense.description)
        .bind(&expense.category)
        .bind(expense.amount)
        .bind(expense.date)
        .fetch_one(&self.db)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                error!(
                    "❌ Expense id={} not found for user {}",
                    expense.expense_id, expense.user_id
                );
                RepositoryError::NotFound
            }
            _ => {
                error!("❌ Failed to update expense id={}: {e:?}", expense.expense_id);
                RepositoryError::Sqlx(e)
            }
        })?;

        Ok(updated)
    }

    async fn delete(&self, id: i64, user_id: i64) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            DELETE FROM expenses
            WHERE expense_id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete expense id={id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(())
    }
}
