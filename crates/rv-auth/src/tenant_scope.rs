use crate::Identity;

use rv_core::TenantOwned;

use log::warn;

/// Return the subset of `items` owned by the identity's tenant.
///
/// `client_tenant_hint` is the caller-supplied tenant from the
/// surrounding protocol (a query parameter). It is read for diagnostics
/// and then ignored; the filter predicate uses the token-derived tenant
/// only. Input order is preserved.
pub fn scope_to_tenant<T: TenantOwned>(
    identity: &Identity,
    items: Vec<T>,
    client_tenant_hint: Option<&str>,
) -> Vec<T> {
    if let Some(hint) = client_tenant_hint {
        if hint != identity.tenant_id {
            warn!(
                "client tenant hint {:?} does not match token tenant; ignoring hint",
                hint
            );
        }
    }

    items
        .into_iter()
        .filter(|item| item.tenant_id() == identity.tenant_id)
        .collect()
}
