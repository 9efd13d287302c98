//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use timecheck_core::DomainError;

/// Convert SQLx error to DomainError
///
/// Server-side errors keep only the database's own message; everything
/// else (I/O, TLS, pool timeouts, decoding) uses the driver's description.
pub fn map_db_error(e: SqlxError) -> DomainError {
    match e.as_database_error() {
        Some(db_err) => DomainError::database_failure(db_err.message()),
        None => DomainError::database_failure(e.to_string()),
    }
}
