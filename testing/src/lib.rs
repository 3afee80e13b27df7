#[cfg(feature = "ac")]
pub mod ac;
#[cfg(feature = "memory")]
pub mod memory;
pub mod mock;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub fn is_send_sync<T: Send + Sync>(_: &T) -> bool {
    true
}
