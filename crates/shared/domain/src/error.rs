//! Domain-level errors.
//!
//! These errors represent business rule violations detected before anything
//! touches storage. They are independent of infrastructure concerns.

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Email is empty or malformed
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Password does not satisfy the strength rules
    #[error("Weak password: {0}")]
    WeakPassword(String),

    /// Any other field failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal domain error (hashing failures and the like)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create an invalid email error
    pub fn invalid_email(msg: impl Into<String>) -> Self {
        DomainError::InvalidEmail(msg.into())
    }

    /// Create a weak password error
    pub fn weak_password(msg: impl Into<String>) -> Self {
        DomainError::WeakPassword(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
