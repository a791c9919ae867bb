use serde::Deserialize;

/// Query parameters for listing receipts
#[derive(Debug, Deserialize)]
pub struct ListReceiptsQuery {
    /// Client-supplied tenant. Part of the wire contract; read for
    /// diagnostics and deliberately ignored by the filter.
    pub tenant_id: Option<String>,
}
