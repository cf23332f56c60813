use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{0}")]
    Custom(String),
}
