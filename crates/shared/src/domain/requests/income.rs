use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIncomeRequest {
    #[validate(length(min = 1, message = "Title is mandatory"))]
    pub title: String,

    pub description: Option<String>,

    #[validate(length(min = 1, message = "Category is mandatory"))]
    pub category: String,

    pub amount: f64,

    pub date: NaiveDate,

    pub user_id: i64,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIncomeRequest {
    pub title: Option<String>,

    pub description: Option<String>,

    pub category: Option<String>,

    pub amount: Option<f64>,

    pub date: Option<NaiveDate>,

    pub user_id: i64,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct FindAllIncomes {
    #[serde(default)]
    pub page: i64,

    #[serde(default = "default_page_size", rename = "size")]
    pub page_size: i64,
}

fn default_page_size() -> i64 {
    10
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FindIncomesByDateRange {
    pub user_id: i64,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,
}
