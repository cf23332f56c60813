use crate::domain::responses::{ExpenseResponse, IncomeResponse};
use crate::model::stats::StatsModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

impl From<StatsModel> for StatsResponse {
    fn from(model: StatsModel) -> Self {
        Self {
            total_income: model.total_income,
            total_expense: model.total_expense,
            balance: model.balance,
        }
    }
}

/// Two independent 30-day series; the lists are not correlated by date.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GraphResponse {
    pub expense_list: Vec<ExpenseResponse>,
    pub income_list: Vec<IncomeResponse>,
}
