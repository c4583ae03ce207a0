use serde::Serialize;
use thiserror::Error;

/// Raised by an aggregate when one of its invariants does not hold.
///
/// The message names the field and the violated rule, e.g.
/// `"Name should be at least 3 characters long"`. Callers match on it, so it
/// is printed as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct EntityValidationError {
    message: String,
}

impl EntityValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
