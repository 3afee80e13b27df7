use fleetcore::ac::{
    agent::Agent,
    grant::Grant,
    permission::ResolvedPermissions,
    role::Roles,
};

/// Merge role membership with the grant table.
///
/// Anonymous agents are denied everything and super admins are granted
/// everything without the grants being looked at.  For everyone else
/// each grant whose role is held and whose page key is recognized is
/// folded into the entry for that page with a boolean OR, so duplicate
/// or overlapping grants can only add access.  Grants for roles not
/// held, or for unknown page keys, are skipped.
pub fn resolve(
    agent: &Agent,
    super_admin: bool,
    roles: &Roles,
    grants: &[Grant],
) -> ResolvedPermissions {
    let mut result = ResolvedPermissions::denied();
    if agent.is_anonymous() {
        return result;
    }
    if super_admin {
        return ResolvedPermissions::granted();
    }
    for grant in grants.iter() {
        if !roles.contains(&grant.role) {
            continue;
        }
        match grant.page() {
            Some(page) => *result.get_mut(page) |= grant.permission(),
            None => log::trace!(
                "skipping grant for role {:?} on unrecognized page key {:?}",
                grant.role,
                grant.page_key,
            ),
        }
    }
    result
}

/// Resolves permissions for an agent against a
/// [`PermissionBackend`](fleetcore::ac::traits::PermissionBackend).
pub struct Resolver<'a, B: ?Sized> {
    backend: &'a B,
}

mod impls;
