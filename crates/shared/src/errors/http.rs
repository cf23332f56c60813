use crate::errors::{errors::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = match self.0 {
            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),

            ServiceError::Conflict(msg) => (StatusCode::CONFLICT, msg),

            ServiceError::NegativeBalance(msg) => (StatusCode::BAD_REQUEST, msg),

            ServiceError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),

            // User-service validation keeps the field -> message map as the body.
            ServiceError::FieldErrors(errors) => {
                return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
            }

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
                RepositoryError::Conflict(msg) => (StatusCode::CONFLICT, msg),
                RepositoryError::Sqlx(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                ),
                RepositoryError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            },

            ServiceError::Remote(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),

            ServiceError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}
