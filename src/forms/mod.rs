//! Parsing of user-supplied lead data.

use thiserror::Error;
use validator::ValidationErrors;

pub mod import;

#[derive(Debug, Error)]
/// Errors that can occur when processing imported lead data.
pub enum FormError {
    #[error("row {row}: malformed CSV record: {source}")]
    Csv { row: usize, source: csv::Error },

    #[error("row {row}: validation errors: {source}")]
    Validation {
        row: usize,
        source: ValidationErrors,
    },

    #[error("row {row}: invalid lead id")]
    InvalidId { row: usize },

    #[error("row {row}: unknown lead source `{value}`")]
    InvalidSource { row: usize, value: String },

    #[error("row {row}: unknown lead status `{value}`")]
    InvalidStatus { row: usize, value: String },

    #[error("row {row}: unrecognized timestamp `{value}`")]
    InvalidTimestamp { row: usize, value: String },
}
