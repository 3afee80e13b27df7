use fleetcore::ac::{
    agent::Agent,
    permission::ResolvedPermissions,
    traits::PermissionBackend,
};

use crate::error::Error;
use super::{
    resolve,
    Resolver,
};

impl<'a, B> Resolver<'a, B>
where
    B: PermissionBackend + Sync + ?Sized,
{
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Fetch the super admin flag, the roles and the grant table
    /// concurrently, then merge them with [`resolve`].
    ///
    /// Nothing is fetched for an anonymous agent.  A super admin is
    /// granted everything even if the role or grant lookups failed, as
    /// neither would have been consulted.  Any other failure is returned
    /// as an error rather than as a denial.
    pub async fn resolve_agent(
        &self,
        agent: &Agent,
    ) -> Result<ResolvedPermissions, Error> {
        let Some(principal) = agent.principal() else {
            log::trace!("resolving for {agent}: anonymous, all denied");
            return Ok(ResolvedPermissions::denied());
        };
        let (super_admin, roles, grants) = futures::join!(
            self.backend.is_super_admin(principal),
            self.backend.roles_of(principal),
            self.backend.all_grants(),
        );
        if super_admin.map_err(|e| {
            log::warn!("super admin lookup for {agent} failed: {e}");
            Error::SuperAdmin(e)
        })? {
            log::debug!("resolving for {agent}: super admin, all granted");
            return Ok(ResolvedPermissions::granted());
        }
        let roles = roles.map_err(|e| {
            log::warn!("role lookup for {agent} failed: {e}");
            Error::Roles(e)
        })?;
        let grants = grants.map_err(|e| {
            log::warn!("grant table lookup for {agent} failed: {e}");
            Error::Grants(e)
        })?;
        log::trace!(
            "resolving for {agent}: {} role(s) against {} grant(s)",
            roles.len(),
            grants.len(),
        );
        Ok(resolve(agent, false, &roles, &grants))
    }
}
