//! The caller visible permission state for a session.
//!
//! The current [`Resolution`] is published through a
//! [`tokio::sync::watch`] channel.  Every refresh first publishes
//! `Pending`, so a gate never shows a decision computed for a previous
//! principal, role set or grant table.  When refreshes overlap, only
//! the most recently started one may publish its result; anything older
//! is discarded on arrival.

use std::sync::atomic::AtomicU64;
use fleetrbac::Resolution;
use tokio::sync::watch;

use crate::platform::Platform;

pub struct PermissionWatch {
    platform: Platform,
    generation: AtomicU64,
    sender: watch::Sender<Resolution>,
}

mod impls;
