use fleetcore::ac::{
    page::PageKey,
    permission::{
        Level,
        PagePermission,
        ResolvedPermissions,
    },
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Error;

/// The caller visible state of a permission resolution.
///
/// `Pending` and `Failed` are both treated as denied for any privileged
/// action, but remain distinct so that a caller can show a loading
/// indicator or a generic error instead of a false access decision.
#[derive(Clone, Debug, Default)]
pub enum Resolution {
    #[default]
    Pending,
    Resolved(ResolvedPermissions),
    Failed(Arc<Error>),
}

/// The answer to a single page permission query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PermissionStatus {
    pub can_view: bool,
    pub can_edit: bool,
    pub pending: bool,
    pub failed: bool,
}

impl Resolution {
    pub fn is_pending(&self) -> bool {
        matches!(self, Resolution::Pending)
    }

    pub fn permissions(&self) -> Option<&ResolvedPermissions> {
        match self {
            Resolution::Resolved(permissions) => Some(permissions),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Resolution::Failed(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    pub fn permission(&self, page: PageKey) -> PermissionStatus {
        match self {
            Resolution::Pending => PermissionStatus {
                pending: true,
                .. Default::default()
            },
            Resolution::Resolved(permissions) => permissions.get(page).into(),
            Resolution::Failed(_) => PermissionStatus {
                failed: true,
                .. Default::default()
            },
        }
    }

    /// Only a completed resolution may allow anything.
    pub fn allows(&self, page: PageKey, level: Level) -> bool {
        self.permissions()
            .map(|permissions| permissions.allows(page, level))
            .unwrap_or(false)
    }
}

impl From<Result<ResolvedPermissions, Error>> for Resolution {
    fn from(result: Result<ResolvedPermissions, Error>) -> Self {
        match result {
            Ok(permissions) => Resolution::Resolved(permissions),
            Err(e) => Resolution::Failed(Arc::new(e)),
        }
    }
}

impl From<PagePermission> for PermissionStatus {
    fn from(permission: PagePermission) -> Self {
        Self {
            can_view: permission.can_view,
            can_edit: permission.can_edit,
            pending: false,
            failed: false,
        }
    }
}

#[cfg(test)]
mod test {
    use fleetcore::{
        ac::grant::Grant,
        error::BackendError,
    };
    use super::*;

    #[test]
    fn permission_status() {
        let pending = Resolution::default();
        assert!(pending.is_pending());
        assert_eq!(pending.permission(PageKey::Users), PermissionStatus {
            can_view: false,
            can_edit: false,
            pending: true,
            failed: false,
        });
        assert!(!pending.allows(PageKey::Users, Level::View));

        let failed = Resolution::from(Err(Error::Grants(
            BackendError::Unavailable("timeout".into())
        )));
        assert!(failed.error().is_some());
        assert_eq!(failed.permission(PageKey::Users), PermissionStatus {
            can_view: false,
            can_edit: false,
            pending: false,
            failed: true,
        });
        assert!(!failed.allows(PageKey::Users, Level::View));

        let mut permissions = ResolvedPermissions::denied();
        *permissions.get_mut(PageKey::Documents) |= Grant::new(
            "support", "documents", true, false
        ).permission();
        let resolved = Resolution::from(Ok(permissions));
        assert_eq!(resolved.permission(PageKey::Documents), PermissionStatus {
            can_view: true,
            can_edit: false,
            pending: false,
            failed: false,
        });
        assert!(resolved.allows(PageKey::Documents, Level::View));
        assert!(!resolved.allows(PageKey::Documents, Level::Edit));
        assert_eq!(resolved.permission(PageKey::Users), PermissionStatus::default());
    }
}
