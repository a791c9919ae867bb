//! Axum extractor running the authorization pipeline
//!
//! credential → verify → extract, composed explicitly so handlers
//! receive the server-trusted identity as a plain argument instead of
//! re-deriving it from request data.

use crate::api::error::ApiError;
use crate::state::AppState;

use rv_auth::{AuthError, Identity};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use error_location::ErrorLocation;

/// Extracts the verified caller identity from the request
///
/// Reads `Authorization: Bearer <token>`, verifies the token against the
/// process-wide key, and enforces the required claims. Any failure maps
/// to the generic authorization failure.
pub struct CallerIdentity(pub Identity);

impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let identity = authorize(parts, state)?;
            Ok(CallerIdentity(identity))
        }
    }
}

/// The pipeline: header → scheme → signature/expiry → required claims.
#[track_caller]
fn authorize(parts: &Parts, state: &AppState) -> Result<Identity, AuthError> {
    let header_value = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })?;

    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })?;

    let claims = state.jwt_validator.validate(token)?;
    let identity = Identity::from_claims(claims)?;

    Ok(identity)
}
