//! An in-memory access control backend for tests.
//!
//! Individual collaborators can be made to fail, and role lookups for
//! a given principal can be held until released, to exercise the
//! pending and failed states of a resolution.

use async_trait::async_trait;
use fleetcore::{
    ac::{
        grant::Grant,
        principal::Principal,
        role::Roles,
        traits::{
            IdentityBackend,
            PermissionBackend,
            PolicyBackend,
            PrincipalBackend,
        },
    },
    error::BackendError,
    platform::{
        DefaultACPlatform,
        PlatformUrl,
    },
};
use parking_lot::Mutex;
use std::{
    collections::{
        BTreeMap,
        HashMap,
    },
    sync::{
        Arc,
        atomic::{
            AtomicUsize,
            Ordering,
        },
    },
};
use tokio::sync::Notify;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Collaborator {
    Identity,
    SuperAdmin,
    Roles,
    Grants,
}

#[derive(Default)]
struct State {
    principals: BTreeMap<String, (Principal, bool)>,
    roles: BTreeMap<String, Roles>,
    grants: Vec<Grant>,
    tokens: HashMap<String, String>,
}

#[derive(Default)]
pub struct MemoryBackend {
    state: Mutex<State>,
    failures: Mutex<Vec<Collaborator>>,
    holds: Mutex<HashMap<String, Arc<Notify>>>,
    fetches: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn principal(
        self,
        id: &str,
        super_admin: bool,
        roles: &[&str],
    ) -> Self {
        {
            let mut state = self.state.lock();
            state.principals.insert(id.to_string(), (
                Principal {
                    id: id.to_string(),
                    name: id.to_string(),
                    created_ts: 0,
                },
                super_admin,
            ));
            state.roles.insert(id.to_string(), Roles::from_iter(roles.iter().copied()));
        }
        self
    }

    pub fn token(self, token: &str, id: &str) -> Self {
        self.state.lock().tokens.insert(token.to_string(), id.to_string());
        self
    }

    /// Appends the grant as is; unlike `set_grant` duplicates are kept.
    pub fn grant(self, role: &str, page_key: &str, can_view: bool, can_edit: bool) -> Self {
        self.state.lock().grants.push(Grant::new(role, page_key, can_view, can_edit));
        self
    }

    pub fn fail(&self, collaborator: Collaborator) {
        self.failures.lock().push(collaborator);
    }

    pub fn recover(&self, collaborator: Collaborator) {
        self.failures.lock().retain(|c| *c != collaborator);
    }

    /// Role lookups for the principal will wait until the returned
    /// `Notify` is signalled.
    pub fn hold(&self, id: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.holds.lock().insert(id.to_string(), notify.clone());
        notify
    }

    /// Number of collaborator reads served so far.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn principal_for(&self, id: &str) -> Option<Principal> {
        self.state.lock()
            .principals
            .get(id)
            .map(|(principal, _)| principal.clone())
    }

    fn check(&self, collaborator: Collaborator) -> Result<(), BackendError> {
        if self.failures.lock().contains(&collaborator) {
            Err(BackendError::Unavailable(format!("{collaborator:?} is failing")))
        } else {
            Ok(())
        }
    }
}

impl PlatformUrl for MemoryBackend {
    fn url(&self) -> &str {
        "memory:"
    }
}

impl DefaultACPlatform for MemoryBackend {}

#[async_trait]
impl IdentityBackend for MemoryBackend {
    async fn principal_by_token(
        &self,
        token: &str,
    ) -> Result<Option<Principal>, BackendError> {
        self.check(Collaborator::Identity)?;
        let state = self.state.lock();
        Ok(state.tokens
            .get(token)
            .and_then(|id| state.principals.get(id))
            .map(|(principal, _)| principal.clone()))
    }
    async fn issue_token(
        &self,
        principal_id: &str,
        token: &str,
    ) -> Result<(), BackendError> {
        self.check(Collaborator::Identity)?;
        self.state.lock().tokens.insert(token.to_string(), principal_id.to_string());
        Ok(())
    }
    async fn revoke_token(
        &self,
        token: &str,
    ) -> Result<bool, BackendError> {
        self.check(Collaborator::Identity)?;
        Ok(self.state.lock().tokens.remove(token).is_some())
    }
}

#[async_trait]
impl PrincipalBackend for MemoryBackend {
    async fn add_principal(
        &self,
        id: &str,
        name: &str,
    ) -> Result<(), BackendError> {
        let mut state = self.state.lock();
        if state.principals.contains_key(id) {
            return Err(BackendError::AppInvariantViolation(format!(
                "principal {id:?} already exists"
            )));
        }
        state.principals.insert(id.to_string(), (
            Principal {
                id: id.to_string(),
                name: name.to_string(),
                created_ts: 0,
            },
            false,
        ));
        Ok(())
    }
    async fn get_principal(
        &self,
        id: &str,
    ) -> Result<Option<Principal>, BackendError> {
        Ok(self.principal_for(id))
    }
    async fn set_super_admin(
        &self,
        id: &str,
        value: bool,
    ) -> Result<bool, BackendError> {
        Ok(self.state.lock()
            .principals
            .get_mut(id)
            .map(|(_, super_admin)| *super_admin = value)
            .is_some())
    }
}

#[async_trait]
impl PermissionBackend for MemoryBackend {
    async fn is_super_admin(
        &self,
        principal: &Principal,
    ) -> Result<bool, BackendError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.check(Collaborator::SuperAdmin)?;
        Ok(self.state.lock()
            .principals
            .get(&principal.id)
            .map(|(_, super_admin)| *super_admin)
            .unwrap_or(false))
    }
    async fn roles_of(
        &self,
        principal: &Principal,
    ) -> Result<Roles, BackendError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let hold = self.holds.lock().remove(&principal.id);
        if let Some(notify) = hold {
            notify.notified().await;
        }
        self.check(Collaborator::Roles)?;
        Ok(self.state.lock()
            .roles
            .get(&principal.id)
            .cloned()
            .unwrap_or_default())
    }
    async fn all_grants(
        &self,
    ) -> Result<Vec<Grant>, BackendError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.check(Collaborator::Grants)?;
        Ok(self.state.lock().grants.clone())
    }
}

#[async_trait]
impl PolicyBackend for MemoryBackend {
    async fn grant_role_to_principal(
        &self,
        principal_id: &str,
        role: &str,
    ) -> Result<bool, BackendError> {
        Ok(self.state.lock()
            .roles
            .entry(principal_id.to_string())
            .or_default()
            .insert(role))
    }
    async fn revoke_role_from_principal(
        &self,
        principal_id: &str,
        role: &str,
    ) -> Result<bool, BackendError> {
        let mut state = self.state.lock();
        let Some(roles) = state.roles.remove(principal_id) else {
            return Ok(false);
        };
        let before = roles.len();
        let roles = roles.into_inner()
            .into_iter()
            .filter(|r| r.as_str() != role)
            .collect::<Roles>();
        let changed = roles.len() != before;
        state.roles.insert(principal_id.to_string(), roles);
        Ok(changed)
    }
    async fn set_grant(
        &self,
        grant: &Grant,
    ) -> Result<(), BackendError> {
        let mut state = self.state.lock();
        state.grants.retain(|g| g.role != grant.role || g.page_key != grant.page_key);
        state.grants.push(grant.clone());
        Ok(())
    }
    async fn remove_grant(
        &self,
        role: &str,
        page_key: &str,
    ) -> Result<bool, BackendError> {
        let mut state = self.state.lock();
        let before = state.grants.len();
        state.grants.retain(|g| g.role != role || g.page_key != page_key);
        Ok(state.grants.len() != before)
    }
}

#[cfg(test)]
mod test {
    use fleetcore::platform::ACPlatform;
    use super::*;

    #[async_std::test]
    async fn smoke() -> anyhow::Result<()> {
        let backend = MemoryBackend::new()
            .principal("alice", false, &["support"])
            .token("t0k3n", "alice")
            .grant("support", "documents", true, false);
        let platform: &dyn ACPlatform = backend.as_dyn();
        let alice = platform.principal_by_token("t0k3n").await?
            .expect("alice has a token");
        assert_eq!(alice.id, "alice");
        assert!(platform.principal_by_token("nope").await?.is_none());
        assert!(platform.roles_of(&alice).await?.contains("support"));
        assert_eq!(platform.all_grants().await?.len(), 1);

        backend.fail(Collaborator::Grants);
        assert!(platform.all_grants().await.is_err());
        backend.recover(Collaborator::Grants);
        assert!(platform.all_grants().await.is_ok());
        assert_eq!(backend.fetches(), 4);
        Ok(())
    }
}
