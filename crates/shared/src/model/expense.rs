use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExpenseModel {
    pub expense_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub user_id: i64,
}
