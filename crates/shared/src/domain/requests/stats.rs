use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FindStats {
    pub user_id: i64,
}

/// Snapshot write keyed by `user_id`; creates or replaces the single row.
#[derive(Debug, Clone)]
pub struct UpsertStatsRequest {
    pub user_id: i64,
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}
