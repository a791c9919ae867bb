//! Receipts REST API handlers
//!
//! Tenant isolation is enforced here: the filter tenant comes from the
//! verified token identity, never from request parameters.

use crate::api::error::Result as ApiResult;
use crate::api::extractors::identity::CallerIdentity;
use crate::api::receipts::list_receipts_query::ListReceiptsQuery;
use crate::api::receipts::receipt_dto::ReceiptDto;
use crate::state::AppState;

use rv_auth::scope_to_tenant;

use axum::{
    Json,
    extract::{Query, State},
};

/// GET /receipts
///
/// List the caller's receipts. The optional `tenant_id` query parameter
/// exists in the wire protocol but never participates in filtering.
pub async fn list_receipts(
    State(state): State<AppState>,
    CallerIdentity(identity): CallerIdentity,
    Query(query): Query<ListReceiptsQuery>,
) -> ApiResult<Json<Vec<ReceiptDto>>> {
    let receipts = state.store.snapshot();

    let scoped = scope_to_tenant(&identity, receipts, query.tenant_id.as_deref());

    let receipts: Vec<ReceiptDto> = scoped.into_iter().map(ReceiptDto::from_receipt).collect();

    Ok(Json(receipts))
}
