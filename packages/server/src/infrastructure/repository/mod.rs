//! Storage for the room registry.

pub mod inmemory;

pub use inmemory::InMemoryRoomRepository;
