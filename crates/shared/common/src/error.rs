//! Unified error handling for the use-case layer and HTTP.
//!
//! Every failure that crosses a layer boundary is an [`AppError`]. Domain rule
//! violations, missing resources, duplicates, authentication failures and
//! wrapped infrastructure failures each have their own variant, and each maps
//! to one HTTP status.

use std::error::Error as StdError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Boxed cause carried by [`AppError::Internal`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Domain
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Exists(String),

    // Authentication
    #[error("{0}")]
    Authentication(String),

    #[error("Authentication required")]
    Unauthorized,

    // Request validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // Infrastructure failure, always with the operation that was attempted
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
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
            AppError::Domain(_) => "DOMAIN_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Exists(_) => "EXISTS",
            AppError::Authentication(_) => "AUTHENTICATION_FAILED",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(_) | AppError::Validation(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Exists(_) => StatusCode::CONFLICT,
            AppError::Authentication(_) | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Internal { message, source } => {
                match source {
                    Some(cause) => tracing::error!("Internal error: {}: {}", message, cause),
                    None => tracing::error!("Internal error: {}", message),
                }
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

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, message: impl Into<String>) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: impl Into<String>) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(message.into()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn exists(msg: impl Into<String>) -> Self {
        AppError::Exists(msg.into())
    }

    pub fn authentication(msg: impl Into<String>) -> Self {
        AppError::Authentication(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    /// Internal error without an underlying cause.
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal {
            message: msg.into(),
            source: None,
        }
    }

    /// Internal error wrapping the cause of a failed operation.
    pub fn internal_with<E>(msg: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        AppError::Internal {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}
