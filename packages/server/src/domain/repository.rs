//! Access to the room registry.
//!
//! The use cases depend on this trait; the storage behind it lives in the
//! infrastructure layer.

use std::ops::DerefMut;

use async_trait::async_trait;

use super::registry::RoomRegistry;

/// Exclusive access to the registry, released on drop.
pub type RegistryGuard<'a> = Box<dyn DerefMut<Target = RoomRegistry> + Send + 'a>;

/// Room Repository trait
///
/// Every action runs one read-modify-write against the registry while
/// holding the guard. Network I/O must not happen until the guard is dropped.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Wait for the global lock and return the registry behind it.
    async fn lock<'a>(&'a self) -> RegistryGuard<'a>;
}
