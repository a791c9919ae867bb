/// Access to the tenant key of a tenant-partitioned record.
///
/// Anything the tenant-scoping filter operates on implements this.
/// The key is compared byte-for-byte; implementations must not
/// normalize or re-case it.
pub trait TenantOwned {
    fn tenant_id(&self) -> &str;
}
