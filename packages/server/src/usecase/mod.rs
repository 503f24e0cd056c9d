//! UseCase layer: one struct per room action.
//!
//! Every use case takes the global lock once, runs the domain operation and
//! releases the lock before returning. No network I/O happens in here.

mod announce;
mod create_room;
mod evict_stale_clients;
mod grant_admin;
mod remove_client;
mod reset_timer;
mod send_control;
mod set_active;
mod subscribe_control;
mod subscribe_roster;

pub use announce::AnnounceUseCase;
pub use create_room::{CreateRoomUseCase, CreatedRoom};
pub use evict_stale_clients::EvictStaleClientsUseCase;
pub use grant_admin::GrantAdminUseCase;
pub use remove_client::RemoveClientUseCase;
pub use reset_timer::ResetTimerUseCase;
pub use send_control::SendControlUseCase;
pub use set_active::SetActiveUseCase;
pub use subscribe_control::{ControlSubscription, SubscribeControlUseCase};
pub use subscribe_roster::{RosterSubscription, SubscribeRosterUseCase};
