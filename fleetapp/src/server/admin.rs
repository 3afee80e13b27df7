use axum::{
    extract::{
        Extension,
        Path,
    },
    Json,
};
use fleetac::Platform;
use fleetcore::ac::{
    grant::Grant,
    role::Roles,
};
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct Changed {
    pub changed: bool,
}

pub async fn list_grants(
    Extension(platform): Extension<Platform>,
) -> Result<Json<Vec<Grant>>, AppError> {
    Ok(Json(platform.list_grants().await?))
}

pub async fn set_grant(
    Extension(platform): Extension<Platform>,
    Json(grant): Json<Grant>,
) -> Result<Json<Grant>, AppError> {
    Ok(Json(platform.set_grant(grant).await?))
}

pub async fn remove_grant(
    Extension(platform): Extension<Platform>,
    Path((role, page_key)): Path<(String, String)>,
) -> Result<Json<Changed>, AppError> {
    let changed = platform.remove_grant(&role, &page_key).await?;
    Ok(Json(Changed { changed }))
}

pub async fn principal_roles(
    Extension(platform): Extension<Platform>,
    Path(id): Path<String>,
) -> Result<Json<Roles>, AppError> {
    Ok(Json(platform.roles_of(&id).await?))
}

pub async fn grant_role(
    Extension(platform): Extension<Platform>,
    Path((id, role)): Path<(String, String)>,
) -> Result<Json<Changed>, AppError> {
    let changed = platform.grant_role_to_principal(&id, &role).await?;
    Ok(Json(Changed { changed }))
}

pub async fn revoke_role(
    Extension(platform): Extension<Platform>,
    Path((id, role)): Path<(String, String)>,
) -> Result<Json<Changed>, AppError> {
    let changed = platform.revoke_role_from_principal(&id, &role).await?;
    Ok(Json(Changed { changed }))
}
