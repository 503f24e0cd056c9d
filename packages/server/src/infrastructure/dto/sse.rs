//! Messages pushed on the event streams.
//!
//! Roster/state streams carry [`EventMessage`], where exactly one of the two
//! fields is set. Control streams carry [`ControlMessage`]. Timestamps are
//! Unix seconds; `active_start` is 0 while inactive.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDto {
    pub client_id: String,
    pub name: String,
    pub admin: bool,
    pub active: bool,
    pub active_start: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminEventDto {
    pub client: ClientDto,
    pub remove: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardEventDto {
    pub active: bool,
    pub active_start: i64,
    pub timer_start: i64,
    /// Empty unless the receiving client is an admin.
    pub admin_secret: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMessage {
    pub admin_event: Option<AdminEventDto>,
    pub standard_event: Option<StandardEventDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlMessage {
    pub control: String,
}
