use async_trait::async_trait;
use fleetcore::{
    ac::{
        grant::Grant,
        principal::Principal,
        role::Roles,
        traits::PermissionBackend,
    },
    error::BackendError,
};
use mockall::mock;

mock! {
    pub Platform {
        pub async fn permission_is_super_admin(
            &self,
            principal: &Principal,
        ) -> Result<bool, BackendError>;
        pub async fn permission_roles_of(
            &self,
            principal: &Principal,
        ) -> Result<Roles, BackendError>;
        pub async fn permission_all_grants(
            &self,
        ) -> Result<Vec<Grant>, BackendError>;
    }
}

#[async_trait]
impl PermissionBackend for MockPlatform {
    async fn is_super_admin(
        &self,
        principal: &Principal,
    ) -> Result<bool, BackendError> {
        self.permission_is_super_admin(principal).await
    }
    async fn roles_of(
        &self,
        principal: &Principal,
    ) -> Result<Roles, BackendError> {
        self.permission_roles_of(principal).await
    }
    async fn all_grants(
        &self,
    ) -> Result<Vec<Grant>, BackendError> {
        self.permission_all_grants().await
    }
}
