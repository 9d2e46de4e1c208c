//! Unified error handling for the account services.
//!
//! Every failure a caller can observe is one of these variants. The
//! `IntoResponse` impl lets an HTTP layer surface them unchanged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error("{0}")]
    InvalidEmail(String),

    #[error("{0}")]
    WeakPassword(String),

    #[error("{0}")]
    Validation(String),

    // Conflicts
    #[error("User with this email already exists")]
    DuplicateEmail,

    #[error("Token already exists")]
    DuplicateToken,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Authentication
    #[error("Unable to authenticate with provided credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Authentication credentials were not provided")]
    Unauthorized,

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Service unavailable")]
    Unavailable(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidEmail(_) => "INVALID_EMAIL",
            AppError::WeakPassword(_) => "WEAK_PASSWORD",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::DuplicateEmail => "DUPLICATE_EMAIL",
            AppError::DuplicateToken => "DUPLICATE_TOKEN",
            AppError::NotFound => "NOT_FOUND",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::InvalidToken => "INVALID_TOKEN",
            AppError::Unauthorized => "UNAUTHORIZED",
            #[cfg(feature = "database")]
            AppError::Database(_) => "SERVICE_UNAVAILABLE",
            AppError::Unavailable(_) => "SERVICE_UNAVAILABLE",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidEmail(_)
            | AppError::WeakPassword(_)
            | AppError::Validation(_)
            | AppError::DuplicateEmail
            | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::InvalidToken | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::DuplicateToken => StatusCode::CONFLICT,
            #[cfg(feature = "database")]
            AppError::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Hide details for storage and internal errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "The service is temporarily unavailable".to_string()
            }
            AppError::Unavailable(reason) => {
                tracing::error!("Service unavailable: {}", reason);
                "The service is temporarily unavailable".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidEmail(msg) => AppError::InvalidEmail(msg),
            DomainError::WeakPassword(msg) => AppError::WeakPassword(msg),
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        AppError::Unavailable(reason.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
