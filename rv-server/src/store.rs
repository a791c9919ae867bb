use rv_core::Receipt;

use std::sync::Arc;

/// In-memory receipt collection standing in for the external store.
///
/// Read-only for the process lifetime; handlers take an owned snapshot
/// per request, so filtering never observes concurrent mutation.
#[derive(Clone)]
pub struct ReceiptStore {
    receipts: Arc<Vec<Receipt>>,
}

impl ReceiptStore {
    pub fn new(receipts: Vec<Receipt>) -> Self {
        Self {
            receipts: Arc::new(receipts),
        }
    }

    /// Seed rows for the demo deployment.
    pub fn with_demo_data() -> Self {
        Self::new(vec![
            Receipt::new(1, "tenant_a".to_string(), 50.0),
            Receipt::new(2, "tenant_a".to_string(), 20.0),
            Receipt::new(3, "tenant_b".to_string(), 100.0),
        ])
    }

    /// Owned copy of the collection for one request.
    pub fn snapshot(&self) -> Vec<Receipt> {
        self.receipts.as_ref().clone()
    }

    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }
}
