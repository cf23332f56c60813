use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserModel {
    pub user_id: i64,
    pub user_name: String,
    pub password: String,
    pub email: String,
}
