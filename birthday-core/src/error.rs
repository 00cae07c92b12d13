//! Error types for birthday-liberator.

use thiserror::Error;

/// Errors that can occur while filtering contacts or building a calendar.
#[derive(Error, Debug)]
pub enum BirthdayError {
    #[error("Required column '{0}' not found in header")]
    MissingColumn(String),

    #[error("Invalid birthday format: {0}")]
    InvalidBirthday(String),

    #[error("Backup error: {0}")]
    Backup(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for birthday-liberator operations.
pub type BirthdayResult<T> = Result<T, BirthdayError>;
