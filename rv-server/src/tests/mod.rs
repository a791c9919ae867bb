mod extractors;

use crate::{AppState, ReceiptStore};

use rv_auth::JwtValidator;

use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Value, json};

pub(crate) const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) fn test_state() -> AppState {
    AppState {
        jwt_validator: Arc::new(JwtValidator::with_hs256(SECRET)),
        store: ReceiptStore::with_demo_data(),
    }
}

pub(crate) fn mint_token(claims: &Value, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

pub(crate) fn tenant_a_token() -> String {
    mint_token(
        &json!({
            "sub": "user_1",
            "tenant_id": "tenant_a",
            "role": "user",
            "exp": 9_999_999_999i64,
        }),
        SECRET,
    )
}
