use crate::store::ReceiptStore;

use rv_auth::JwtValidator;

use std::sync::Arc;

/// Shared application state
///
/// Everything here is built once at startup and read-only afterwards;
/// request handling never mutates it.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide verification key, never rotated
    pub jwt_validator: Arc<JwtValidator>,
    pub store: ReceiptStore,
}
