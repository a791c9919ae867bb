use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Server-trusted caller identity, extracted from verified claims.
///
/// This is the only legitimate origin of `tenant_id` for authorization
/// decisions. Field values are the claim bytes, unchanged: no
/// normalization, casing changes, or trimming.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub user_id: String,
    pub tenant_id: String,
    pub role: String,
}

impl Identity {
    /// Build an identity from a verified claim set.
    ///
    /// `sub` (the user id), `tenant_id`, and `role` must each be present
    /// and non-empty; each is checked independently so the internal error
    /// names the offending claim.
    #[track_caller]
    pub fn from_claims(claims: Claims) -> AuthErrorResult<Self> {
        let user_id = required(claims.sub, "sub")?;
        let tenant_id = required(claims.tenant_id, "tenant_id")?;
        let role = required(claims.role, "role")?;

        Ok(Self {
            user_id,
            tenant_id,
            role,
        })
    }
}

#[track_caller]
fn required(value: Option<String>, claim: &'static str) -> AuthErrorResult<String> {
    match value {
        None => Err(AuthError::MissingClaim {
            claim: claim.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
        Some(v) if v.is_empty() => Err(AuthError::EmptyClaim {
            claim: claim.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
        Some(v) => Ok(v),
    }
}
