use crate::tenancy::TenantOwned;

use serde::{Deserialize, Serialize};

/// A receipt row as the external store hands it to us.
///
/// Wire form is `{id, tenant_id, amount}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: i64,
    pub tenant_id: String,
    pub amount: f64,
}

impl Receipt {
    pub fn new(id: i64, tenant_id: String, amount: f64) -> Self {
        Self {
            id,
            tenant_id,
            amount,
        }
    }
}

impl TenantOwned for Receipt {
    fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
}
