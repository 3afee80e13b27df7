pub mod error;
pub mod gate;
pub mod platform;
pub mod watch;

pub use gate::AccessGate;
pub use platform::Platform;
pub use watch::PermissionWatch;
