use crate::{
    platform::PlatformUrl,
    ac::traits::{
        IdentityBackend,
        PermissionBackend,
        PolicyBackend,
        PrincipalBackend,
    },
};

/// ACPlatform - Access Control Platform
///
/// This platform persists principals, their roles, the grant table and
/// the bearer tokens that identify them.
///
/// This trait is applicable to everything that correctly implements the
/// relevant backends that compose this trait.
pub trait ACPlatform: IdentityBackend
    + PermissionBackend
    + PolicyBackend
    + PrincipalBackend

    + PlatformUrl

    + Send
    + Sync
{
    fn as_dyn(&self) -> &dyn ACPlatform;
}

pub trait DefaultACPlatform: ACPlatform {}

impl<P: IdentityBackend
    + PermissionBackend
    + PolicyBackend
    + PrincipalBackend

    + PlatformUrl

    + DefaultACPlatform

    + Send
    + Sync
> ACPlatform for P {
    fn as_dyn(&self) -> &(dyn ACPlatform) {
        self
    }
}
