use fleetcore::ac::{
    page::PageKey,
    permission::Level,
};
use fleetrbac::Resolution;

use super::*;

impl AccessGate {
    pub fn new(page: PageKey) -> Self {
        Self {
            page,
            level: Level::View,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }

    pub fn require_edit(mut self, val: bool) -> Self {
        self.level = Level::from_require_edit(val);
        self
    }

    pub fn level(mut self, val: Level) -> Self {
        self.level = val;
        self
    }

    pub fn fallback(mut self, val: impl Into<String>) -> Self {
        self.fallback = val.into();
        self
    }

    pub fn page(&self) -> PageKey {
        self.page
    }

    pub fn required_level(&self) -> Level {
        self.level
    }

    pub fn state(&self, resolution: &Resolution) -> GateState {
        match resolution {
            Resolution::Pending => GateState::Pending,
            Resolution::Failed(_) => GateState::Failed,
            Resolution::Resolved(permissions) => {
                if permissions.allows(self.page, self.level) {
                    GateState::Granted
                } else {
                    GateState::Denied
                }
            }
        }
    }

    /// Decide what to render; `content` is only called when access is
    /// granted.
    pub fn guard<C>(
        &self,
        resolution: &Resolution,
        content: impl FnOnce() -> C,
    ) -> GateView<C> {
        let state = self.state(resolution);
        log::trace!("gate page={} level={}: {state:?}", self.page, self.level);
        match state {
            GateState::Pending => GateView::Loading,
            GateState::Denied => GateView::Denied {
                page: self.page,
                fallback: self.fallback.clone(),
            },
            GateState::Granted => GateView::Granted(content()),
            GateState::Failed => GateView::Error,
        }
    }
}

impl<C> GateView<C> {
    pub fn is_granted(&self) -> bool {
        matches!(self, GateView::Granted(_))
    }

    pub fn into_content(self) -> Option<C> {
        match self {
            GateView::Granted(content) => Some(content),
            _ => None,
        }
    }
}
