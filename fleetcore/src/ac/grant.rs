use serde::{Deserialize, Serialize};
use std::str::FromStr;
use super::{
    page::PageKey,
    permission::PagePermission,
};

/// A grant row: what holders of `role` may do on the page named by
/// `page_key`.
///
/// The page key is kept as the raw text from the grant table, as rows
/// may reference page keys unknown to this build; use [`Grant::page`]
/// to obtain the recognized key, if any.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Grant {
    pub role: String,
    pub page_key: String,
    pub can_view: bool,
    pub can_edit: bool,
}

impl Grant {
    pub fn new(
        role: impl Into<String>,
        page_key: impl Into<String>,
        can_view: bool,
        can_edit: bool,
    ) -> Self {
        Self {
            role: role.into(),
            page_key: page_key.into(),
            can_view,
            can_edit,
        }
    }

    pub fn page(&self) -> Option<PageKey> {
        PageKey::from_str(&self.page_key).ok()
    }

    pub fn permission(&self) -> PagePermission {
        PagePermission {
            can_view: self.can_view,
            can_edit: self.can_edit,
        }
    }
}
