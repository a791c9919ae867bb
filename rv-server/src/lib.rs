pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::identity::CallerIdentity,
    receipts::{
        list_receipts_query::ListReceiptsQuery, receipt_dto::ReceiptDto, receipts::list_receipts,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
pub use crate::store::ReceiptStore;
