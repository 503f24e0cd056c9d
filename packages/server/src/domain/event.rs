//! Events pushed to subscriber sessions.

use super::value_object::{AdminToken, ClientId, ControlSignal, DisplayName, Timestamp};

/// Point-in-time copy of a client's public state.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSnapshot {
    pub client_id: ClientId,
    pub name: DisplayName,
    pub is_admin: bool,
    pub active_start: Option<Timestamp>,
}

impl ClientSnapshot {
    pub fn is_active(&self) -> bool {
        self.active_start.is_some()
    }
}

/// Roster change, delivered to admin subscribers only.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEvent {
    pub client: ClientSnapshot,
    pub removed: bool,
}

/// A client's own state, delivered to that client only.
///
/// `admin_token` is present only when the receiving client is an admin.
#[derive(Debug, Clone, PartialEq)]
pub struct StateEvent {
    pub active_start: Option<Timestamp>,
    pub timer_start: Timestamp,
    pub admin_token: Option<AdminToken>,
}

impl StateEvent {
    pub fn is_active(&self) -> bool {
        self.active_start.is_some()
    }
}

/// Opaque signal for presentation viewers.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlEvent {
    pub control: ControlSignal,
}

/// Everything a roster/state session can receive through its queue.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Roster(RosterEvent),
    State(StateEvent),
}

impl From<RosterEvent> for Event {
    fn from(event: RosterEvent) -> Self {
        Self::Roster(event)
    }
}

impl From<StateEvent> for Event {
    fn from(event: StateEvent) -> Self {
        Self::State(event)
    }
}
