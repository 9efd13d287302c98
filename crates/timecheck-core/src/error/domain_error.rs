//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// The service has a single failure category: anything that goes wrong
/// while talking to the database.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{message}")]
    DatabaseFailure { message: String },
}

impl DomainError {
    /// Create a database failure carrying the driver's message
    pub fn database_failure(message: impl Into<String>) -> Self {
        Self::DatabaseFailure {
            message: message.into(),
        }
    }

    /// Get an error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::DatabaseFailure { .. } => "DATABASE_FAILURE",
        }
    }

    /// The human-readable message, without any prefix
    pub fn message(&self) -> &str {
        match self {
            Self::DatabaseFailure { message } => message,
        }
    }
}
