use serde::{Deserialize, Serialize};

/// The authenticated caller.  The identifier is opaque to this crate;
/// it is whatever the identity backend hands out.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Principal {
    pub id: String,
    pub name: String,
    pub created_ts: i64,
}
