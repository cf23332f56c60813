use crate::model::expense::ExpenseModel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub user_id: i64,
}

impl From<ExpenseModel> for ExpenseResponse {
    fn from(model: ExpenseModel) -> Self {
        Self {
            id: model.expense_id,
            title: model.title,
            description: model.description,
            category: model.category,
            amount: model.amount,
            date: model.date,
            user_id: model.user_id,
        }
    }
}
