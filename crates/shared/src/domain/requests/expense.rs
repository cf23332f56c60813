use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    #[validate(length(min = 1, message = "Title is mandatory"))]
    pub title: String,

    pub description: Option<String>,

    #[validate(length(min = 1, message = "Category is mandatory"))]
    pub category: String,

    pub amount: f64,

    pub date: NaiveDate,

    pub user_id: i64,
}

/// Partial update: absent fields leave the stored record untouched. The
/// `user_id` in the body is the authorization key for the lookup.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpenseRequest {
    pub title: Option<String>,

    pub description: Option<String>,

    pub category: Option<String>,

    pub amount: Option<f64>,

    pub date: Option<NaiveDate>,

    pub user_id: i64,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct FindAllExpenses {
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
pub struct FindExpensesByDateRange {
    pub user_id: i64,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,
}
