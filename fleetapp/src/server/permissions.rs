use axum::{
    extract::{
        Extension,
        Path,
    },
    Json,
};
use fleetcore::ac::{
    page::PageKey,
    permission::ResolvedPermissions,
    principal::Principal,
};
use fleetrbac::{
    error::Error as RbacError,
    PermissionStatus,
};

use crate::{
    error::AppError,
    server::Caller,
};

pub async fn all_permissions(
    Extension(caller): Extension<Caller>,
) -> Result<Json<ResolvedPermissions>, AppError> {
    match caller.resolution.permissions() {
        Some(permissions) => Ok(Json(permissions.clone())),
        None if caller.resolution.is_pending() => Err(AppError::ServiceUnavailable),
        None => Err(AppError::InternalServerError),
    }
}

/// The `{ can_view, can_edit, pending, failed }` status for one page;
/// a failed resolution is reported through the flags rather than as an
/// error status.
pub async fn page_permission(
    Extension(caller): Extension<Caller>,
    Path(page_key): Path<String>,
) -> Result<Json<PermissionStatus>, AppError> {
    let page = page_key.parse::<PageKey>()
        .map_err(|_| AppError::NotFound)?;
    Ok(Json(caller.resolution.permission(page)))
}

/// The current principal, or null for an anonymous caller.  A failed
/// identity lookup is an error, not an anonymous caller.
pub async fn session(
    Extension(caller): Extension<Caller>,
) -> Result<Json<Option<Principal>>, AppError> {
    if let Some(RbacError::Identity(e)) = caller.resolution.error() {
        log::warn!("session lookup failed: {e}");
        return Err(AppError::InternalServerError);
    }
    Ok(Json(caller.agent.into()))
}
