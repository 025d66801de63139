//! Error types for the Contacts API.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Repository errors travel unchanged through the service layer; the HTTP layer
//! decides how they are presented to clients.

use thiserror::Error;

/// Errors produced by repositories and propagated by the service layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No entity matches the given identifier
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The store could not complete the operation (connectivity, constraint, query)
    #[error("Store failure: {0}")]
    StoreFailure(String),
}

impl RepositoryError {
    /// Build a `NotFound` error for an entity kind and identifier.
    pub fn not_found(kind: &str, id: &str) -> Self {
        RepositoryError::NotFound(format!("{} {}", kind, id))
    }

    /// Whether this error reports a missing entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound(_))
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => RepositoryError::NotFound("no matching row".to_string()),
            other => RepositoryError::StoreFailure(other.to_string()),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
