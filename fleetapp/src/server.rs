//! The HTTP surface.
//!
//! Every request passes through the [`caller`] layer, which resolves
//! the bearer token into an agent together with its permissions exactly
//! once.  Admin routes are additionally wrapped in an [`gate`] layer
//! that admits the request only when the caller holds the one flag the
//! route requires.

use axum::{
    extract::Extension,
    handler::Handler,
    middleware::from_fn_with_state,
    routing::{
        delete,
        get,
        put,
    },
    Router,
};
use fleetac::{
    AccessGate,
    Platform,
};
use fleetcore::ac::page::PageKey;

pub mod admin;
pub mod caller;
pub mod gate;
pub mod permissions;

pub use caller::Caller;

pub fn router(platform: Platform) -> Router {
    let settings_view = from_fn_with_state(
        AccessGate::new(PageKey::Settings),
        gate::enforce_gate,
    );
    let settings_edit = from_fn_with_state(
        AccessGate::new(PageKey::Settings).require_edit(true),
        gate::enforce_gate,
    );
    let users_view = from_fn_with_state(
        AccessGate::new(PageKey::Users),
        gate::enforce_gate,
    );
    let users_edit = from_fn_with_state(
        AccessGate::new(PageKey::Users).require_edit(true),
        gate::enforce_gate,
    );

    Router::new()
        .route("/api/permissions", get(permissions::all_permissions))
        .route("/api/permissions/{page_key}", get(permissions::page_permission))
        .route("/api/session", get(permissions::session))
        .route("/api/admin/grants",
            get(admin::list_grants.layer(settings_view))
                .put(admin::set_grant.layer(settings_edit.clone())))
        .route("/api/admin/grants/{role}/{page_key}",
            delete(admin::remove_grant.layer(settings_edit)))
        .route("/api/admin/principals/{id}/roles",
            get(admin::principal_roles.layer(users_view)))
        .route("/api/admin/principals/{id}/roles/{role}",
            put(admin::grant_role.layer(users_edit.clone()))
                .delete(admin::revoke_role.layer(users_edit)))
        .layer(from_fn_with_state(platform.clone(), caller::resolve_caller))
        .layer(Extension(platform))
}
