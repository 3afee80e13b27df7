//! Access gate for a guarded unit of content.
//!
//! A gate is associated with one page and one required level.  Given
//! the current [`Resolution`](fleetrbac::Resolution) it decides between
//! a loading placeholder, an access denied notice, a generic error, or
//! the guarded content itself.  The content is only produced once the
//! decision is to grant access, so nothing is rendered speculatively
//! while resolution is pending, and a failed resolution never falls
//! through to the content.

use fleetcore::ac::{
    page::PageKey,
    permission::Level,
};
use serde::Serialize;

pub const DEFAULT_FALLBACK: &str = "/";

#[derive(Clone, Debug)]
pub struct AccessGate {
    page: PageKey,
    level: Level,
    fallback: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    Pending,
    Denied,
    Granted,
    Failed,
}

/// What the caller should render.
#[derive(Clone, Debug, PartialEq)]
pub enum GateView<C> {
    Loading,
    /// Carries the path back to a safe page; following it is left to
    /// the user.
    Denied {
        page: PageKey,
        fallback: String,
    },
    Granted(C),
    Error,
}

mod impls;
