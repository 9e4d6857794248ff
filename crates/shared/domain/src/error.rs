//! Domain-level errors.
//!
//! These errors represent business rule violations detected by the entities
//! themselves. They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identity value is not a UUID
    #[error("{entity} id must be a valid UUID. Received: {value}")]
    InvalidId { entity: &'static str, value: String },

    /// Required field is blank
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field exceeds its maximum length
    #[error("{field} must be {max} characters or fewer. Current length: {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// Email address is malformed
    #[error("email address is invalid: {0}")]
    InvalidEmail(String),

    /// Employee has no department assigned
    #[error("employee {0} has no department assigned")]
    MissingDepartment(String),
}

impl DomainError {
    /// Create an invalid id error
    pub fn invalid_id(entity: &'static str, value: impl Into<String>) -> Self {
        DomainError::InvalidId {
            entity,
            value: value.into(),
        }
    }

    /// Create a required field error
    pub fn required(field: &'static str) -> Self {
        DomainError::Required { field }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
