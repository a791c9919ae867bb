//! REST API error types
//!
//! Every authorization failure collapses to one constant-shape 401
//! response, so a caller cannot tell a bad signature from an expired
//! token or a missing claim.

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use rv_auth::AuthError;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code and message
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "UNAUTHORIZED")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authorization failure (401). Carries no cause on purpose: the
    /// cause is logged where the variant is constructed and must not
    /// reach the client in any form.
    #[error("Unauthorized")]
    Unauthorized,

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message: "Invalid authentication credentials".into(),
                },
            ),
            ApiError::Internal { message, location } => {
                log::error!("Internal error: {} {}", message, location);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        code: "INTERNAL_ERROR".into(),
                        message: "Internal server error".into(),
                    },
                )
            }
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert auth pipeline errors to API errors
///
/// The specific cause stays in the server log; the client sees the one
/// generic authorization failure regardless of variant.
impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        log::warn!("authorization failed: {}", e);
        ApiError::Unauthorized
    }
}

impl ApiError {
    /// Internal error (500) with caller location attached
    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
