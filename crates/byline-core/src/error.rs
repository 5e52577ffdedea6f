//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Discriminates which business rule a write violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    EmptyName,
    DuplicateName,
    InvalidPhoneFormat,
    MissingRequiredPhrase,
    ContentTooShort,
    SummaryTooLong,
    InvalidCategory,
}

/// A single rejected field value.
///
/// Every validator produces this one error category; the `kind` tells the
/// caller which rule fired, the message is safe to show to an end user.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ValidationKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ValidationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Storage-level failures are kept distinct from validation failures, so a
    /// concurrent duplicate slipping past the pre-check surfaces as storage
    /// constraint violation rather than a ValidationError.
    #[error("Storage error: {0}")]
    Storage(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
