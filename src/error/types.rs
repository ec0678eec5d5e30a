/**
 * Service Error Types
 *
 * This module defines the error type used by HTTP handlers and the
 * auth/recipe modules. Every failure a request can hit maps to exactly one
 * variant, and every variant maps to one HTTP status code.
 *
 * # Non-leaking messages
 *
 * Authentication failures deliberately use a single message whether the
 * email was unknown or the password was wrong, so account existence cannot
 * be probed. Storage and internal errors expose a generic message; the
 * cause is available via `Display`/`source` for logging only.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Service-wide error type
///
/// Each variant carries the context needed for logging; `status_code()` and
/// `message()` define what the client sees.
#[derive(Debug, Error)]
pub enum AppError {
    /// Email/password pair did not verify
    ///
    /// Covers both "no such email" and "wrong password" so the two are
    /// indistinguishable to the caller.
    #[error("incorrect email or password")]
    InvalidCredentials,

    /// Registration attempted with an email that is already registered
    #[error("email already in use")]
    EmailTaken,

    /// Protected operation invoked without a resolvable session
    #[error("authentication required")]
    Unauthenticated,

    /// Referenced record does not exist
    #[error("not found")]
    NotFound,

    /// Request payload rejected at the boundary
    #[error("validation failed: {message}")]
    Validation {
        /// Human-readable reason for the rejection
        message: String,
    },

    /// Storage is not configured (no pool in application state)
    #[error("storage not configured")]
    Unavailable,

    /// Storage operation failed
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Password hashing or token generation failed
    #[error("internal error: {message}")]
    Internal {
        /// Description of what failed, for logs only
        message: String,
    },
}

impl AppError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Storage and internal errors are collapsed to a generic message; the
    /// real cause stays in the logs.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Incorrect email or password.".to_string(),
            Self::EmailTaken => "Email already in use.".to_string(),
            Self::Unauthenticated => "Authentication required.".to_string(),
            Self::NotFound => "Not found.".to_string(),
            Self::Validation { message } => message.clone(),
            Self::Unavailable => "Service temporarily unavailable.".to_string(),
            Self::Storage(_) => "Operation failed.".to_string(),
            Self::Internal { .. } => "Server error.".to_string(),
        }
    }
}
