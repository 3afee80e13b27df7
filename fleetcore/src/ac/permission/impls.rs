use std::{
    fmt,
    ops::{
        BitOr,
        BitOrAssign,
    },
};
use super::*;

impl PagePermission {
    pub const DENIED: Self = Self { can_view: false, can_edit: false };
    pub const GRANTED: Self = Self { can_view: true, can_edit: true };

    pub fn new(can_view: bool, can_edit: bool) -> Self {
        Self { can_view, can_edit }
    }

    pub fn allows(&self, level: Level) -> bool {
        match level {
            Level::View => self.can_view,
            Level::Edit => self.can_edit,
        }
    }
}

impl BitOr for PagePermission {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            can_view: self.can_view || rhs.can_view,
            can_edit: self.can_edit || rhs.can_edit,
        }
    }
}

impl BitOrAssign for PagePermission {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl Level {
    pub fn from_require_edit(require_edit: bool) -> Self {
        if require_edit {
            Level::Edit
        } else {
            Level::View
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Level::View => "view",
            Level::Edit => "edit",
        })
    }
}

impl ResolvedPermissions {
    fn filled(value: PagePermission) -> Self {
        Self(PageKey::all()
            .iter()
            .map(|page| (page, value))
            .collect()
        )
    }

    /// Every page denied.
    pub fn denied() -> Self {
        Self::filled(PagePermission::DENIED)
    }

    /// Every page granted, for both view and edit.
    pub fn granted() -> Self {
        Self::filled(PagePermission::GRANTED)
    }

    pub fn get(&self, page: PageKey) -> PagePermission {
        self.0.get(&page)
            .copied()
            .unwrap_or_default()
    }

    pub fn get_mut(&mut self, page: PageKey) -> &mut PagePermission {
        self.0.entry(page).or_default()
    }

    pub fn allows(&self, page: PageKey, level: Level) -> bool {
        self.get(page).allows(level)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PageKey, PagePermission)> + '_ {
        self.0.iter().map(|(page, permission)| (*page, *permission))
    }
}

impl From<BTreeMap<PageKey, PagePermission>> for ResolvedPermissions {
    fn from(value: BTreeMap<PageKey, PagePermission>) -> Self {
        let mut result = Self::denied();
        result.0.extend(value);
        result
    }
}

impl From<ResolvedPermissions> for BTreeMap<PageKey, PagePermission> {
    fn from(value: ResolvedPermissions) -> Self {
        value.0
    }
}

impl Default for ResolvedPermissions {
    fn default() -> Self {
        Self::denied()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn merge() {
        let view = PagePermission::new(true, false);
        let edit = PagePermission::new(false, true);
        assert_eq!(view | edit, PagePermission::GRANTED);
        assert_eq!(view | view, view);
        assert_eq!(view | PagePermission::DENIED, view);

        let mut permission = PagePermission::default();
        assert_eq!(permission, PagePermission::DENIED);
        permission |= edit;
        assert_eq!(permission, edit);
        // edit without view stays as is.
        assert!(permission.allows(Level::Edit));
        assert!(!permission.allows(Level::View));
    }

    #[test]
    fn resolved_permissions_total() -> anyhow::Result<()> {
        let denied = ResolvedPermissions::default();
        assert_eq!(denied.iter().count(), PageKey::all().len());
        assert!(denied.iter().all(|(_, p)| p == PagePermission::DENIED));

        let granted = ResolvedPermissions::granted();
        assert_eq!(granted.iter().count(), PageKey::all().len());
        assert!(granted.allows(PageKey::Users, Level::Edit));

        let value = serde_json::to_value(&denied)?;
        assert_eq!(value["users"], serde_json::json!({
            "can_view": false,
            "can_edit": false,
        }));
        assert_eq!(value.as_object().map(|o| o.len()), Some(10));

        let partial: ResolvedPermissions = serde_json::from_str(r#"{
            "fleet": {"can_view": true, "can_edit": false}
        }"#)?;
        assert_eq!(partial.iter().count(), PageKey::all().len());
        assert_eq!(partial.get(PageKey::Fleet), PagePermission::new(true, false));
        assert_eq!(partial.get(PageKey::Users), PagePermission::DENIED);
        Ok(())
    }
}
