//! # Persistence Errors
//!
//! Error types cho persistence layer, wrapping sqlx errors.

use bank_account_core::CoreError;
use thiserror::Error;

/// Persistence layer errors
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid decimal value: {0}")]
    InvalidDecimal(String),
}

/// Result type alias cho PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

impl From<PersistenceError> for CoreError {
    fn from(err: PersistenceError) -> Self {
        CoreError::Internal(err.to_string())
    }
}
