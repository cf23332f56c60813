use crate::model::income::IncomeModel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncomeResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub user_id: i64,
}

impl From<IncomeModel> for IncomeResponse {
    fn from(model: IncomeModel) -> Self {
        Self {
            id: model.income_id,
            title: model.title,
            description: model.description,
            category: model.category,
            amount: model.amount,
            date: model.date,
            user_id: model.user_id,
        }
    }
}
