use async_trait::async_trait;
use crate::error::BackendError;
use super::{
    grant::Grant,
    page::PageKey,
    permission::Level,
    principal::Principal,
    role::Roles,
};

/// Maps opaque bearer credentials to principals.
#[async_trait]
pub trait IdentityBackend {
    async fn principal_by_token(
        &self,
        token: &str,
    ) -> Result<Option<Principal>, BackendError>;
    async fn issue_token(
        &self,
        principal_id: &str,
        token: &str,
    ) -> Result<(), BackendError>;
    async fn revoke_token(
        &self,
        token: &str,
    ) -> Result<bool, BackendError>;
}

#[async_trait]
pub trait PrincipalBackend {
    async fn add_principal(
        &self,
        id: &str,
        name: &str,
    ) -> Result<(), BackendError>;
    async fn get_principal(
        &self,
        id: &str,
    ) -> Result<Option<Principal>, BackendError>;
    async fn set_super_admin(
        &self,
        id: &str,
        value: bool,
    ) -> Result<bool, BackendError>;
}

/// The read side consumed by the permission resolver.
#[async_trait]
pub trait PermissionBackend {
    async fn is_super_admin(
        &self,
        principal: &Principal,
    ) -> Result<bool, BackendError>;
    async fn roles_of(
        &self,
        principal: &Principal,
    ) -> Result<Roles, BackendError>;
    async fn all_grants(
        &self,
    ) -> Result<Vec<Grant>, BackendError>;
}

/// Administrative writes for role membership and the grant table.
#[async_trait]
pub trait PolicyBackend {
    async fn grant_role_to_principal(
        &self,
        principal_id: &str,
        role: &str,
    ) -> Result<bool, BackendError>;
    async fn revoke_role_from_principal(
        &self,
        principal_id: &str,
        role: &str,
    ) -> Result<bool, BackendError>;
    async fn set_grant(
        &self,
        grant: &Grant,
    ) -> Result<(), BackendError>;
    async fn remove_grant(
        &self,
        role: &str,
        page_key: &str,
    ) -> Result<bool, BackendError>;
}

pub trait Enforcer {
    fn enforce(&self, page: PageKey, level: Level) -> bool;
}
