use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use super::page::PageKey;

/// The two independent access flags for a page.
///
/// `can_edit` does not imply `can_view`; callers that want that
/// inference must make it themselves.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct PagePermission {
    pub can_view: bool,
    pub can_edit: bool,
}

/// The access level a guarded unit of content requires.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    #[default]
    View,
    Edit,
}

/// Per page permissions computed for a single agent.
///
/// Every `PageKey` always has an entry; none of the constructors can
/// leave a key out, and keys missing from a deserialized mapping are
/// filled in as denied.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(
    from = "BTreeMap<PageKey, PagePermission>",
    into = "BTreeMap<PageKey, PagePermission>",
)]
pub struct ResolvedPermissions(BTreeMap<PageKey, PagePermission>);

mod impls;
