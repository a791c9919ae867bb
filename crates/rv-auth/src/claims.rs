use serde::{Deserialize, Serialize};

/// Raw JWT payload, produced only by successful signature verification.
///
/// The identity fields stay `Option` here so that an absent claim surfaces
/// as an extraction failure with the claim's name, not as an opaque
/// deserialization failure. Presence and non-emptiness are enforced by
/// `Identity::from_claims`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Tenant identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Coarse-grained role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Expiration timestamp (Unix). Absent means non-expiring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Issued at timestamp (Unix)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}
