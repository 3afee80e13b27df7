use fleetac::platform::{
    Builder,
    Platform,
};
use fleetcore::platform::ACPlatform;
use std::sync::Arc;

use crate::{
    memory::MemoryBackend,
    sqlite::create_sqlite_backend,
};

pub async fn create_sqlite_platform() -> anyhow::Result<Platform> {
    Ok(Builder::new()
        .ac_platform(create_sqlite_backend().await?)
        .build()?)
}

pub fn create_memory_platform(backend: Arc<MemoryBackend>) -> anyhow::Result<Platform> {
    Ok(Builder::new()
        .boxed_ac_platform(backend as Arc<dyn ACPlatform>)
        .build()?)
}

/// A sqlite backed platform with a small fleet office worth of
/// principals, roles and grants.
///
/// - `root`: super admin, no roles
/// - `alice`: support
/// - `bob`: support, driver_manager
/// - `carol`: no roles
///
/// Returns the platform along with the bearer tokens issued for each
/// principal, in the order above.
pub async fn create_seeded_platform() -> anyhow::Result<(Platform, [String; 4])> {
    let platform = create_sqlite_platform().await?;
    for (id, name) in [
        ("root", "Root"),
        ("alice", "Alice"),
        ("bob", "Bob"),
        ("carol", "Carol"),
    ] {
        platform.create_principal(id, name).await?;
    }
    platform.set_super_admin("root", true).await?;
    platform.grant_role_to_principal("alice", "support").await?;
    platform.grant_role_to_principal("bob", "support").await?;
    platform.grant_role_to_principal("bob", "driver_manager").await?;
    for grant in [
        ("support", "documents", true, false),
        ("support", "dashboard", true, false),
        ("driver_manager", "documents", false, true),
        ("driver_manager", "drivers", true, true),
        ("driver_manager", "users", true, false),
        ("driver_manager", "settings", true, false),
    ] {
        let (role, page_key, can_view, can_edit) = grant;
        platform.set_grant(fleetcore::ac::grant::Grant::new(
            role, page_key, can_view, can_edit,
        )).await?;
    }
    let tokens = [
        platform.issue_token("root").await?,
        platform.issue_token("alice").await?,
        platform.issue_token("bob").await?,
        platform.issue_token("carol").await?,
    ];
    Ok((platform, tokens))
}
