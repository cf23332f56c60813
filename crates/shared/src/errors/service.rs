use crate::errors::repository::RepositoryError;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NegativeBalance(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Validation failed: {0:?}")]
    FieldErrors(HashMap<String, String>),

    #[error("Remote call failed: {0}")]
    Remote(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
