use fleetcore::{
    ac::{
        agent::Agent,
        grant::Grant,
        page::PageKey,
        permission::{
            PagePermission,
            ResolvedPermissions,
        },
        role::Roles,
    },
    error::BackendError,
};
use fleetrbac::{
    error::Error,
    Resolution,
    Resolver,
};
use test_fleet::{
    memory::{
        Collaborator,
        MemoryBackend,
    },
    mock::MockPlatform,
};

fn backend() -> MemoryBackend {
    MemoryBackend::new()
        .principal("root", true, &[])
        .principal("alice", false, &["support"])
        .principal("bob", false, &["support", "driver_manager"])
        .principal("carol", false, &[])
        .grant("support", "documents", true, false)
        .grant("driver_manager", "documents", false, true)
        .grant("driver_manager", "drivers", true, true)
        .grant("support", "retired_page", true, true)
}

fn agent(backend: &MemoryBackend, id: &str) -> Agent {
    backend.principal_for(id)
        .expect("principal should exist")
        .into()
}

#[async_std::test]
async fn anonymous_fetches_nothing() -> anyhow::Result<()> {
    let mut mock = MockPlatform::new();
    mock.expect_permission_is_super_admin().times(0);
    mock.expect_permission_roles_of().times(0);
    mock.expect_permission_all_grants().times(0);
    let result = Resolver::new(&mock)
        .resolve_agent(&Agent::Anonymous)
        .await?;
    assert_eq!(result, ResolvedPermissions::denied());
    Ok(())
}

#[async_std::test]
async fn fetches_once_per_collaborator() -> anyhow::Result<()> {
    let backend = backend();
    let mut mock = MockPlatform::new();
    mock.expect_permission_is_super_admin()
        .times(1)
        .returning(|_| Ok(false));
    mock.expect_permission_roles_of()
        .times(1)
        .returning(|_| Ok(Roles::from_iter(["support"])));
    mock.expect_permission_all_grants()
        .times(1)
        .returning(|| Ok(vec![
            Grant::new("support", "quality", true, false),
        ]));
    let result = Resolver::new(&mock)
        .resolve_agent(&agent(&backend, "alice"))
        .await?;
    assert_eq!(result.get(PageKey::Quality), PagePermission::new(true, false));
    assert_eq!(result.get(PageKey::Documents), PagePermission::DENIED);
    Ok(())
}

#[async_std::test]
async fn scenarios() -> anyhow::Result<()> {
    let backend = backend();
    let resolver = Resolver::new(&backend);

    let alice = resolver.resolve_agent(&agent(&backend, "alice")).await?;
    assert_eq!(alice.get(PageKey::Documents), PagePermission::new(true, false));
    assert_eq!(alice.get(PageKey::Users), PagePermission::new(false, false));

    let bob = resolver.resolve_agent(&agent(&backend, "bob")).await?;
    assert_eq!(bob.get(PageKey::Documents), PagePermission::new(true, true));
    assert_eq!(bob.get(PageKey::Drivers), PagePermission::new(true, true));

    let carol = resolver.resolve_agent(&agent(&backend, "carol")).await?;
    assert_eq!(carol, ResolvedPermissions::denied());

    let root = resolver.resolve_agent(&agent(&backend, "root")).await?;
    assert_eq!(root, ResolvedPermissions::granted());

    // resolving again gives the same answer
    assert_eq!(resolver.resolve_agent(&agent(&backend, "bob")).await?, bob);
    Ok(())
}

#[async_std::test]
async fn collaborator_failures() -> anyhow::Result<()> {
    let backend = backend();
    let resolver = Resolver::new(&backend);
    let alice = agent(&backend, "alice");

    backend.fail(Collaborator::Grants);
    let result = resolver.resolve_agent(&alice).await;
    assert!(matches!(result, Err(Error::Grants(BackendError::Unavailable(_)))));
    let resolution = Resolution::from(result);
    let status = resolution.permission(PageKey::Documents);
    assert!(status.failed);
    assert!(!status.pending);
    assert!(!status.can_view);
    backend.recover(Collaborator::Grants);

    backend.fail(Collaborator::Roles);
    assert!(matches!(
        resolver.resolve_agent(&alice).await,
        Err(Error::Roles(_)),
    ));
    backend.recover(Collaborator::Roles);

    backend.fail(Collaborator::SuperAdmin);
    assert!(matches!(
        resolver.resolve_agent(&alice).await,
        Err(Error::SuperAdmin(_)),
    ));
    // the super admin flag cannot be skipped, even for a super admin.
    assert!(matches!(
        resolver.resolve_agent(&agent(&backend, "root")).await,
        Err(Error::SuperAdmin(_)),
    ));
    backend.recover(Collaborator::SuperAdmin);

    assert!(resolver.resolve_agent(&alice).await.is_ok());
    Ok(())
}

#[async_std::test]
async fn super_admin_ignores_grant_failures() -> anyhow::Result<()> {
    let backend = backend();
    backend.fail(Collaborator::Grants);
    backend.fail(Collaborator::Roles);
    let result = Resolver::new(&backend)
        .resolve_agent(&agent(&backend, "root"))
        .await?;
    assert_eq!(result, ResolvedPermissions::granted());
    Ok(())
}
