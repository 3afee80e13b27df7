use enumset::EnumSetType;
use serde::{Deserialize, Serialize};

/// The protected sections of the admin application.
///
/// This set is closed and fixed at build time.  The `page_key` column of
/// the grant table is expected to use the `snake_case` names below; rows
/// naming anything else are ignored during resolution rather than being
/// treated as errors, so grants for retired or not yet deployed pages
/// never break resolution of the others.
#[derive(Debug, EnumSetType, Hash, Ord, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKey {
    Dashboard,
    // the section is labelled "operators" in parts of the UI
    #[serde(alias = "operators")]
    Companies,
    Documents,
    Fleet,
    Devices,
    Drivers,
    Equipment,
    Quality,
    Settings,
    Users,
}

mod impls;
