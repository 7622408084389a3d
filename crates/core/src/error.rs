//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, recoverable failures of the query
/// layer (parameter validation, data integrity). Infrastructure concerns
/// belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A query parameter failed validation (e.g. negative threshold,
    /// unparsable date). The query is not executed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Consolidated data failed a check that ingestion is expected to
    /// guarantee upstream.
    #[error("data integrity fault: {0}")]
    DataIntegrity(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn data_integrity(msg: impl Into<String>) -> Self {
        Self::DataIntegrity(msg.into())
    }
}
