use rv_core::Receipt;

use serde::Serialize;

/// Wire representation of a receipt: `{id, tenant_id, amount}`
#[derive(Debug, Serialize)]
pub struct ReceiptDto {
    pub id: i64,
    pub tenant_id: String,
    pub amount: f64,
}

impl ReceiptDto {
    pub fn from_receipt(receipt: Receipt) -> Self {
        Self {
            id: receipt.id,
            tenant_id: receipt.tenant_id,
            amount: receipt.amount,
        }
    }
}
