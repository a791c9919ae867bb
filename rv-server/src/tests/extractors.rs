use crate::api::error::ApiError;
use crate::api::extractors::identity::CallerIdentity;
use crate::tests::{SECRET, mint_token, tenant_a_token, test_state};

use axum::{body::Body, extract::FromRequestParts, http::Request};
use serde_json::json;

#[tokio::test]
async fn test_extractor_with_valid_bearer_token() {
    let state = test_state();
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", tenant_a_token()))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CallerIdentity::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    let identity = result.unwrap().0;
    assert_eq!(identity.user_id, "user_1");
    assert_eq!(identity.tenant_id, "tenant_a");
    assert_eq!(identity.role, "user");
}

#[tokio::test]
async fn test_extractor_rejects_missing_header() {
    let state = test_state();
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CallerIdentity::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn test_extractor_rejects_non_bearer_scheme() {
    let state = test_state();
    let request = Request::builder()
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CallerIdentity::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn test_extractor_rejects_token_with_missing_claim() {
    let state = test_state();
    let token = mint_token(&json!({"sub": "user_1", "role": "user"}), SECRET);
    let request = Request::builder()
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CallerIdentity::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn test_extractor_preserves_tenant_bytes() {
    let state = test_state();
    let token = mint_token(
        &json!({"sub": "user_1", "tenant_id": " Tenant_A ", "role": "user"}),
        SECRET,
    );
    let request = Request::builder()
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let identity = CallerIdentity::from_request_parts(&mut parts, &state)
        .await
        .unwrap()
        .0;

    // Claim bytes pass through untouched.
    assert_eq!(identity.tenant_id, " Tenant_A ");
}
