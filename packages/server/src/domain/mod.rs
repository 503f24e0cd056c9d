//! Domain layer: rooms, clients, the events they emit and the rules that
//! decide who receives them.
//!
//! Everything here is free of I/O. Apart from [`RoomRepository`], which
//! hands out the locked registry, it is also synchronous. Callers are
//! expected to hold the single registry lock while invoking any mutating
//! operation.

pub mod admin_token;
pub mod broadcast;
pub mod entity;
pub mod error;
pub mod event;
pub mod pusher;
pub mod registry;
pub mod repository;
pub mod value_object;

pub use admin_token::AdminTokenIssuer;
pub use entity::{Client, Room};
pub use error::{RoomError, ValueObjectError};
pub use event::{ClientSnapshot, ControlEvent, Event, RosterEvent, StateEvent};
pub use pusher::{Outbox, PushError, SubscriptionId};
pub use registry::RoomRegistry;
pub use repository::{RegistryGuard, RoomRepository};
pub use value_object::{AdminToken, ClientId, ControlSignal, DisplayName, RoomId, Timestamp};
