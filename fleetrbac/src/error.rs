use fleetcore::error::BackendError;

/// A collaborator failed while resolving permissions.  This is never
/// the same thing as having no access.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to identify the caller: {0}")]
    Identity(#[source] BackendError),
    #[error("failed to look up super admin status: {0}")]
    SuperAdmin(#[source] BackendError),
    #[error("failed to fetch roles: {0}")]
    Roles(#[source] BackendError),
    #[error("failed to fetch grants: {0}")]
    Grants(#[source] BackendError),
}
