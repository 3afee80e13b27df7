use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named category of principals, e.g. `admin`, `support` or
/// `driver_manager`.  The set of role names is open; roles only gain
/// meaning through the grants that reference them.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Role(String);

/// The roles held by a single principal.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Roles(BTreeSet<Role>);

mod impls;
