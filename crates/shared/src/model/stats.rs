use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Last computed stats snapshot, at most one row per user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StatsModel {
    pub stats_id: i64,
    pub user_id: i64,
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}
