use fleetcore::{
    ac::{
        agent::Agent,
        grant::Grant,
        page::PageKey,
        permission::ResolvedPermissions,
        principal::Principal,
        role::Roles,
    },
    error::BackendError,
    platform::ACPlatform,
};
use fleetrbac::{
    error::Error as RbacError,
    PermissionEnforcer,
    Resolution,
    Resolver,
};
use rand::{
    distributions::Alphanumeric,
    Rng,
};
use std::{
    str::FromStr,
    sync::Arc,
};

use crate::error::Error;
use super::*;

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ac_platform(mut self, val: impl ACPlatform + 'static) -> Self {
        self.ac_platform = Some(Arc::new(val));
        self
    }

    pub fn boxed_ac_platform(mut self, val: Arc<dyn ACPlatform>) -> Self {
        self.ac_platform = Some(val);
        self
    }

    pub fn token_length(mut self, val: usize) -> Self {
        self.token_length = Some(val);
        self
    }

    pub fn build(self) -> Result<Platform, Error> {
        let token_length = self.token_length.unwrap_or(DEFAULT_TOKEN_LENGTH);
        if token_length < 16 {
            return Err(Error::Misconfiguration("token length must be at least 16"));
        }
        Ok(Platform {
            ac_platform: self.ac_platform
                .ok_or(Error::Misconfiguration("missing required argument ac_platform"))?,
            token_length,
        })
    }
}

impl Platform {
    pub fn ac_platform(&self) -> &dyn ACPlatform {
        self.ac_platform.as_ref()
    }
}

// Identity

impl Platform {
    async fn agent_for_bearer(
        &self,
        token: Option<&str>,
    ) -> Result<Agent, BackendError> {
        let Some(token) = token else {
            return Ok(Agent::Anonymous);
        };
        let principal = self.ac_platform.principal_by_token(token).await?;
        if principal.is_none() {
            log::debug!("unrecognized bearer token; treating as anonymous");
        }
        Ok(principal.into())
    }

    /// Map an optional bearer token to an agent.  A missing or unknown
    /// token is the anonymous agent; only a backend failure is an error.
    pub async fn agent_for_token(
        &self,
        token: Option<&str>,
    ) -> Result<Agent, Error> {
        Ok(self.agent_for_bearer(token).await?)
    }

    /// Issue a fresh bearer token for the principal.
    pub async fn issue_token(
        &self,
        principal_id: &str,
    ) -> Result<String, Error> {
        self.get_principal(principal_id).await?;
        let token = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.token_length)
            .map(char::from)
            .collect::<String>();
        self.ac_platform.issue_token(principal_id, &token).await?;
        log::info!("issued a new token for principal {principal_id:?}");
        Ok(token)
    }

    pub async fn revoke_token(
        &self,
        token: &str,
    ) -> Result<bool, Error> {
        Ok(self.ac_platform.revoke_token(token).await?)
    }
}

// Permission resolution

impl Platform {
    pub async fn resolve_agent(
        &self,
        agent: &Agent,
    ) -> Result<ResolvedPermissions, Error> {
        Ok(Resolver::new(self.ac_platform.as_ref())
            .resolve_agent(agent)
            .await?)
    }

    /// As [`Platform::resolve_agent`], but with any failure kept in the
    /// returned [`Resolution`] rather than returned as an error.
    pub async fn resolution_for(
        &self,
        agent: &Agent,
    ) -> Resolution {
        Resolver::new(self.ac_platform.as_ref())
            .resolve_agent(agent)
            .await
            .into()
    }

    /// Resolve the agent behind an optional bearer token in one step.
    /// A failed identity lookup yields the anonymous agent with a failed
    /// resolution, never a silent denial.
    pub async fn resolve_token(
        &self,
        token: Option<&str>,
    ) -> (Agent, Resolution) {
        match self.agent_for_bearer(token).await {
            Ok(agent) => {
                let resolution = self.resolution_for(&agent).await;
                (agent, resolution)
            }
            Err(e) => {
                log::warn!("identity lookup failed: {e}");
                (Agent::Anonymous, Resolution::Failed(Arc::new(
                    RbacError::Identity(e)
                )))
            }
        }
    }

    pub async fn enforcer(
        &self,
        agent: &Agent,
    ) -> Result<PermissionEnforcer, Error> {
        Ok(self.resolve_agent(agent).await?.into())
    }
}

// Principal management

impl Platform {
    pub async fn create_principal(
        &self,
        id: &str,
        name: &str,
    ) -> Result<Principal, Error> {
        self.ac_platform.add_principal(id, name).await?;
        self.get_principal(id).await
    }

    pub async fn get_principal(
        &self,
        id: &str,
    ) -> Result<Principal, Error> {
        self.ac_platform.get_principal(id).await?
            .ok_or_else(|| Error::UnknownPrincipal(id.to_string()))
    }

    pub async fn set_super_admin(
        &self,
        id: &str,
        value: bool,
    ) -> Result<(), Error> {
        if self.ac_platform.set_super_admin(id, value).await? {
            log::info!("principal {id:?} super admin set to {value}");
            Ok(())
        } else {
            Err(Error::UnknownPrincipal(id.to_string()))
        }
    }

    pub async fn is_super_admin(
        &self,
        id: &str,
    ) -> Result<bool, Error> {
        let principal = self.get_principal(id).await?;
        Ok(self.ac_platform.is_super_admin(&principal).await?)
    }

    pub async fn roles_of(
        &self,
        id: &str,
    ) -> Result<Roles, Error> {
        let principal = self.get_principal(id).await?;
        Ok(self.ac_platform.roles_of(&principal).await?)
    }
}

// Role and grant management

impl Platform {
    pub async fn grant_role_to_principal(
        &self,
        id: &str,
        role: &str,
    ) -> Result<bool, Error> {
        self.get_principal(id).await?;
        Ok(self.ac_platform.grant_role_to_principal(id, role).await?)
    }

    pub async fn revoke_role_from_principal(
        &self,
        id: &str,
        role: &str,
    ) -> Result<bool, Error> {
        self.get_principal(id).await?;
        Ok(self.ac_platform.revoke_role_from_principal(id, role).await?)
    }

    /// Create or replace the grant for its (role, page_key) pair.  Only
    /// recognized page keys may be written.
    pub async fn set_grant(
        &self,
        grant: Grant,
    ) -> Result<Grant, Error> {
        let page = PageKey::from_str(&grant.page_key)?;
        // store the canonical name, as aliases are only accepted on input.
        let grant = Grant {
            page_key: page.to_string(),
            .. grant
        };
        self.ac_platform.set_grant(&grant).await?;
        log::info!(
            "grant set: role={:?} page={} view={} edit={}",
            grant.role,
            page,
            grant.can_view,
            grant.can_edit,
        );
        Ok(grant)
    }

    /// Remove a grant.  A recognized page key, alias included, removes
    /// the row stored under its canonical name.  Any other key is used
    /// as is so that rows for retired pages may be cleaned up.
    pub async fn remove_grant(
        &self,
        role: &str,
        page_key: &str,
    ) -> Result<bool, Error> {
        let canonical = PageKey::from_str(page_key)
            .map(|page| page.as_str())
            .unwrap_or(page_key);
        let mut removed = self.ac_platform.remove_grant(role, canonical).await?;
        if !removed && canonical != page_key {
            // rows written under the alias before it was canonicalized
            removed = self.ac_platform.remove_grant(role, page_key).await?;
        }
        if removed {
            log::info!("grant removed: role={role:?} page={page_key:?}");
        }
        Ok(removed)
    }

    pub async fn list_grants(&self) -> Result<Vec<Grant>, Error> {
        Ok(self.ac_platform.all_grants().await?)
    }
}
