use std::io::ErrorKind;

use thiserror::Error;

use crate::forms::FormError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Lead source not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate lead id: {0}")]
    DuplicateId(String),

    #[error("Unsupported lead file: {0}")]
    UnsupportedFormat(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => RepositoryError::NotFound(err.to_string()),
            _ => RepositoryError::Io(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            RepositoryError::Io(err.to_string())
        } else {
            RepositoryError::Parse(err.to_string())
        }
    }
}

impl From<FormError> for RepositoryError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Csv { .. } => RepositoryError::Parse(err.to_string()),
            _ => RepositoryError::Validation(err.to_string()),
        }
    }
}
