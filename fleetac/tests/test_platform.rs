use fleetac::{
    error::Error,
    gate::{
        GateState,
        GateView,
    },
    AccessGate,
    PermissionWatch,
};
use fleetcore::{
    ac::{
        agent::Agent,
        grant::Grant,
        page::PageKey,
        permission::{
            Level,
            PagePermission,
            ResolvedPermissions,
        },
        traits::Enforcer,
    },
    error::ValueError,
};
use fleetrbac::{
    error::Error as RbacError,
    Resolution,
};
use std::sync::Arc;
use test_fleet::{
    ac::{
        create_memory_platform,
        create_seeded_platform,
        create_sqlite_platform,
    },
    is_send_sync,
    memory::{
        Collaborator,
        MemoryBackend,
    },
};

#[async_std::test]
async fn principal_management() -> anyhow::Result<()> {
    let platform = create_sqlite_platform().await?;
    assert!(is_send_sync(&platform));

    assert!(matches!(
        platform.get_principal("alice").await,
        Err(Error::UnknownPrincipal(id)) if id == "alice",
    ));
    let alice = platform.create_principal("alice", "Alice").await?;
    assert_eq!(alice.id, "alice");
    assert_eq!(platform.get_principal("alice").await?, alice);

    assert!(!platform.is_super_admin("alice").await?);
    platform.set_super_admin("alice", true).await?;
    assert!(platform.is_super_admin("alice").await?);
    assert!(matches!(
        platform.set_super_admin("nobody", true).await,
        Err(Error::UnknownPrincipal(_)),
    ));

    assert!(platform.grant_role_to_principal("alice", "support").await?);
    assert!(!platform.grant_role_to_principal("alice", "support").await?);
    assert!(platform.roles_of("alice").await?.contains("support"));
    assert!(platform.revoke_role_from_principal("alice", "support").await?);
    assert!(platform.roles_of("alice").await?.is_empty());
    assert!(matches!(
        platform.grant_role_to_principal("nobody", "support").await,
        Err(Error::UnknownPrincipal(_)),
    ));
    assert!(matches!(
        platform.revoke_role_from_principal("nobody", "support").await,
        Err(Error::UnknownPrincipal(_)),
    ));
    Ok(())
}

#[async_std::test]
async fn grant_management() -> anyhow::Result<()> {
    let platform = create_sqlite_platform().await?;
    let grant = platform.set_grant(Grant::new("support", "operators", true, false)).await?;
    // aliases are stored under the canonical page key
    assert_eq!(grant.page_key, "companies");
    assert!(matches!(
        platform.set_grant(Grant::new("support", "invoices", true, true)).await,
        Err(Error::Value(ValueError::Unsupported(s))) if s == "invoices",
    ));
    assert_eq!(platform.list_grants().await?, vec![
        Grant::new("support", "companies", true, false),
    ]);
    assert!(platform.remove_grant("support", "companies").await?);
    assert!(platform.list_grants().await?.is_empty());

    // the alias removes what the alias set
    platform.set_grant(Grant::new("support", "operators", true, true)).await?;
    assert!(platform.remove_grant("support", "operators").await?);
    assert!(!platform.remove_grant("support", "operators").await?);
    assert!(platform.list_grants().await?.is_empty());
    Ok(())
}

#[async_std::test]
async fn remove_grant_raw_keys() -> anyhow::Result<()> {
    let backend = Arc::new(MemoryBackend::new()
        .grant("support", "invoices", true, false)
        .grant("support", "operators", true, false)
    );
    let platform = create_memory_platform(backend)?;
    // retired page keys are removed verbatim
    assert!(platform.remove_grant("support", "invoices").await?);
    // as is a row still stored under the alias
    assert!(platform.remove_grant("support", "operators").await?);
    assert!(platform.list_grants().await?.is_empty());
    Ok(())
}

#[async_std::test]
async fn tokens() -> anyhow::Result<()> {
    let (platform, [_, alice, _, _]) = create_seeded_platform().await?;
    let agent = platform.agent_for_token(Some(&alice)).await?;
    assert_eq!(agent.principal().map(|p| p.id.as_str()), Some("alice"));
    assert_eq!(platform.agent_for_token(None).await?, Agent::Anonymous);
    assert_eq!(platform.agent_for_token(Some("bogus")).await?, Agent::Anonymous);

    assert!(platform.revoke_token(&alice).await?);
    assert_eq!(platform.agent_for_token(Some(&alice)).await?, Agent::Anonymous);
    assert!(matches!(
        platform.issue_token("nobody").await,
        Err(Error::UnknownPrincipal(_)),
    ));
    Ok(())
}

#[async_std::test]
async fn resolution_scenarios() -> anyhow::Result<()> {
    let (platform, [root, alice, bob, carol]) = create_seeded_platform().await?;

    let (_, resolution) = platform.resolve_token(Some(&root)).await;
    assert_eq!(resolution.permissions(), Some(&ResolvedPermissions::granted()));

    let (agent, resolution) = platform.resolve_token(Some(&alice)).await;
    assert_eq!(agent.principal().map(|p| p.id.as_str()), Some("alice"));
    let permissions = resolution.permissions().expect("resolved");
    assert_eq!(permissions.get(PageKey::Documents), PagePermission::new(true, false));
    assert_eq!(permissions.get(PageKey::Users), PagePermission::DENIED);

    let (_, resolution) = platform.resolve_token(Some(&bob)).await;
    let permissions = resolution.permissions().expect("resolved");
    assert_eq!(permissions.get(PageKey::Documents), PagePermission::GRANTED);
    assert_eq!(permissions.get(PageKey::Users), PagePermission::new(true, false));

    let (_, resolution) = platform.resolve_token(Some(&carol)).await;
    assert_eq!(resolution.permissions(), Some(&ResolvedPermissions::denied()));

    let (agent, resolution) = platform.resolve_token(None).await;
    assert_eq!(agent, Agent::Anonymous);
    assert_eq!(resolution.permissions(), Some(&ResolvedPermissions::denied()));

    // bob may view users but not edit them
    let gate = AccessGate::new(PageKey::Users).require_edit(true);
    assert_eq!(
        gate.state(&platform.resolve_token(Some(&bob)).await.1),
        GateState::Denied,
    );
    let enforcer = platform.enforcer(&platform.agent_for_token(Some(&bob)).await?).await?;
    assert!(enforcer.enforce(PageKey::Users, Level::View));
    assert!(!enforcer.enforce(PageKey::Users, Level::Edit));
    Ok(())
}

#[async_std::test]
async fn grant_changes_apply_on_refresh() -> anyhow::Result<()> {
    let (platform, [_, alice, _, _]) = create_seeded_platform().await?;
    let agent = platform.agent_for_token(Some(&alice)).await?;
    let watch = PermissionWatch::new(platform.clone());
    let gate = AccessGate::new(PageKey::Fleet);

    assert_eq!(gate.guard(&watch.current(), || ()), GateView::Loading);
    assert!(watch.refresh(&agent).await);
    assert!(matches!(gate.guard(&watch.current(), || ()), GateView::Denied { .. }));

    platform.set_grant(Grant::new("support", "fleet", true, false)).await?;
    // still the old decision until re-resolved
    assert!(matches!(gate.guard(&watch.current(), || ()), GateView::Denied { .. }));
    assert!(watch.refresh(&agent).await);
    assert_eq!(gate.guard(&watch.current(), || "fleet"), GateView::Granted("fleet"));
    Ok(())
}

#[async_std::test]
async fn identity_failure_is_not_anonymous() -> anyhow::Result<()> {
    let backend = Arc::new(MemoryBackend::new()
        .principal("alice", false, &["support"])
        .token("t0k3n", "alice")
        .grant("support", "dashboard", true, false)
    );
    let platform = create_memory_platform(backend.clone())?;

    backend.fail(Collaborator::Identity);
    let (agent, resolution) = platform.resolve_token(Some("t0k3n")).await;
    assert_eq!(agent, Agent::Anonymous);
    assert!(matches!(resolution.error(), Some(RbacError::Identity(_))));
    assert_eq!(
        AccessGate::new(PageKey::Dashboard).guard(&resolution, || ()),
        GateView::Error,
    );
    assert!(platform.agent_for_token(Some("t0k3n")).await.is_err());

    // no token means no identity lookup at all
    let (_, resolution) = platform.resolve_token(None).await;
    assert!(matches!(resolution, Resolution::Resolved(_)));

    backend.recover(Collaborator::Identity);
    let (_, resolution) = platform.resolve_token(Some("t0k3n")).await;
    assert!(resolution.allows(PageKey::Dashboard, Level::View));
    Ok(())
}

#[async_std::test]
async fn resolution_failure_surfaces() -> anyhow::Result<()> {
    let backend = Arc::new(MemoryBackend::new()
        .principal("alice", false, &["support"])
        .grant("support", "dashboard", true, false)
    );
    let platform = create_memory_platform(backend.clone())?;
    let agent: Agent = backend.principal_for("alice")
        .expect("alice exists")
        .into();
    backend.fail(Collaborator::Roles);
    assert!(matches!(
        platform.resolve_agent(&agent).await,
        Err(Error::Resolution(RbacError::Roles(_))),
    ));
    assert!(platform.resolution_for(&agent).await.permission(PageKey::Dashboard).failed);
    Ok(())
}
