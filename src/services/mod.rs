use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod leads;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
