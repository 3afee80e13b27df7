use fleetcore::ac::{
    agent::Agent,
    page::PageKey,
};
use fleetrbac::{
    PermissionStatus,
    Resolution,
};
use std::sync::atomic::{
    AtomicU64,
    Ordering,
};
use tokio::sync::watch;

use crate::platform::Platform;
use super::PermissionWatch;

impl PermissionWatch {
    pub fn new(platform: Platform) -> Self {
        let (sender, _) = watch::channel(Resolution::Pending);
        Self {
            platform,
            generation: AtomicU64::new(0),
            sender,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Resolution> {
        self.sender.subscribe()
    }

    pub fn current(&self) -> Resolution {
        self.sender.borrow().clone()
    }

    /// The `getPermission` query against the current state.
    pub fn permission(&self, page: PageKey) -> PermissionStatus {
        self.sender.borrow().permission(page)
    }

    /// Drop the current state back to pending, superseding any refresh
    /// still in flight.  Returns the new generation.
    pub fn invalidate(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.sender.send_replace(Resolution::Pending);
        generation
    }

    /// Resolve permissions for the agent and publish the result, unless
    /// a newer refresh or invalidation happened in the meantime.
    /// Returns whether the result was published.
    pub async fn refresh(&self, agent: &Agent) -> bool {
        let generation = self.invalidate();
        log::trace!("refresh #{generation} for {agent} started");
        let resolution = self.platform.resolution_for(agent).await;
        let published = self.sender.send_if_modified(|current| {
            // checked while holding the channel's write lock
            if self.generation.load(Ordering::SeqCst) == generation {
                *current = resolution;
                true
            } else {
                false
            }
        });
        if published {
            log::trace!("refresh #{generation} for {agent} published");
        } else {
            log::debug!("refresh #{generation} for {agent} superseded; result discarded");
        }
        published
    }
}
