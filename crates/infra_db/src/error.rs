//! Database error types
//!
//! This module defines the error types that can occur during database
//! operations, providing meaningful messages and proper error chaining.

use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Entity not found in database
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Check constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,
}

impl DatabaseError {
    /// Creates a not found error for a specific entity type and identifier
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        DatabaseError::NotFound(format!("{} with id '{}' not found", entity, id))
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound(_))
    }

    /// Checks if this error is a constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DatabaseError::DuplicateEntry(_) | DatabaseError::ConstraintViolation(_)
        )
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

/// Converts SQLx errors to more specific DatabaseError variants
///
/// Maps PostgreSQL error codes to the matching variant.
impl From<&sqlx::Error> for DatabaseError {
    fn from(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => DatabaseError::NotFound("Record not found".to_string()),
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        "23505" => DatabaseError::DuplicateEntry(db_err.message().to_string()),
                        "23514" => DatabaseError::ConstraintViolation(db_err.message().to_string()),
                        _ => DatabaseError::QueryFailed(db_err.message().to_string()),
                    }
                } else {
                    DatabaseError::QueryFailed(db_err.message().to_string())
                }
            }
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}
