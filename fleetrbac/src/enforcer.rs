use fleetcore::ac::{
    page::PageKey,
    permission::{
        Level,
        ResolvedPermissions,
    },
    traits::Enforcer,
};

/// A simple enforcer over an already resolved set of permissions.
pub struct PermissionEnforcer {
    permissions: ResolvedPermissions,
}

impl From<ResolvedPermissions> for PermissionEnforcer {
    fn from(permissions: ResolvedPermissions) -> Self {
        Self { permissions }
    }
}

impl From<PermissionEnforcer> for ResolvedPermissions {
    fn from(enforcer: PermissionEnforcer) -> Self {
        enforcer.permissions
    }
}

impl Enforcer for PermissionEnforcer {
    fn enforce(&self, page: PageKey, level: Level) -> bool {
        let result = self.permissions.allows(page, level);
        log::trace!("enforce page={page} level={level}: {result}");
        result
    }
}

#[cfg(test)]
mod test {
    use fleetcore::ac::{
        agent::Agent,
        grant::Grant,
        principal::Principal,
        role::Roles,
    };
    use crate::resolve;
    use super::*;

    #[test]
    fn permission_enforcer() -> anyhow::Result<()> {
        let agent: Agent = Principal {
            id: "alice".to_owned(),
            name: "Alice".to_owned(),
            created_ts: 1234567890,
        }.into();
        let grants: Vec<Grant> = serde_json::from_str(r#"[
            {"role": "support", "page_key": "documents", "can_view": true, "can_edit": false},
            {"role": "support", "page_key": "fleet", "can_view": true, "can_edit": true},
            {"role": "admin", "page_key": "users", "can_view": true, "can_edit": true}
        ]"#)?;
        let roles = Roles::from_iter(["support"]);
        let enforcer: PermissionEnforcer = resolve(&agent, false, &roles, &grants).into();
        assert!(enforcer.enforce(PageKey::Documents, Level::View));
        assert!(!enforcer.enforce(PageKey::Documents, Level::Edit));
        assert!(enforcer.enforce(PageKey::Fleet, Level::Edit));
        assert!(!enforcer.enforce(PageKey::Users, Level::View));
        Ok(())
    }
}
