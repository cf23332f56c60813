use crate::model::user::UserModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Transfer shape: the password is never echoed back, it always serializes
/// as null.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_name: String,
    pub password: Option<String>,
    pub email: String,
}

impl From<UserModel> for UserResponse {
    fn from(model: UserModel) -> Self {
        Self {
            user_name: model.user_name,
            password: None,
            email: model.email,
        }
    }
}
