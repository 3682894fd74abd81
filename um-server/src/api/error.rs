//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes. Every gateway failure is caught
//! here and mapped to one of three outcomes; nothing propagates past the
//! handler boundary.

use um_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body: `{ "message": "..." }`
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation or constraint failure (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, message) = match self {
            ApiError::NotFound { message, .. } => (StatusCode::NOT_FOUND, message),
            ApiError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ApiErrorResponse { message })).into_response()
    }
}

/// Convert gateway errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            // Store-level constraint violations (duplicate email) are the
            // caller's fault, not ours.
            DbError::UniqueViolation { message, .. } => ApiError::Validation {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::Internal {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert UUID parse errors to API errors
///
/// Handlers that must treat a malformed id as not-found (get, delete) map
/// the parse failure themselves instead of using this conversion.
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid user id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
