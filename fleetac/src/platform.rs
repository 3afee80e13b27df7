use fleetcore::platform::ACPlatform;
use std::sync::Arc;

/// Builds the access control [`Platform`].
#[derive(Default)]
pub struct Builder {
    ac_platform: Option<Arc<dyn ACPlatform>>,
    token_length: Option<usize>,
}

/// Identity, permission resolution and administration on top of an
/// [`ACPlatform`].  Cheap to clone.
#[derive(Clone)]
pub struct Platform {
    ac_platform: Arc<dyn ACPlatform>,
    token_length: usize,
}

pub(crate) const DEFAULT_TOKEN_LENGTH: usize = 32;

mod impls;
