use serde::Serialize;
use thiserror::Error;

use super::EntityValidationError;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Aggregate invariant violated. Displays the validation message verbatim.
    #[error(transparent)]
    Validation(#[from] EntityValidationError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Validation failure carried by this error, if any
    pub fn as_validation(&self) -> Option<&EntityValidationError> {
        match self {
            AppError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("Serialization error: {}", err))
    }
}

impl From<log::ParseLevelError> for AppError {
    fn from(err: log::ParseLevelError) -> Self {
        AppError::ConfigError(format!("Invalid log level: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
