pub mod models;
pub mod tenancy;

pub use models::receipt::Receipt;
pub use tenancy::TenantOwned;
