//! Event fan-out: who receives which event.
//!
//! Selection is fixed:
//! - roster events go to every subscribed admin of the room,
//! - state events go to the one client they describe,
//! - control events go to every presentation viewer of the room.
//!
//! A recipient without a live queue simply misses the event; nothing is
//! buffered for a later reconnect.

use super::{
    entity::Room,
    event::{ControlEvent, RosterEvent, StateEvent},
    pusher::PushError,
    value_object::{ClientId, RoomId},
};

impl Room {
    /// Build the state event `client_id` should see, if it exists.
    pub fn state_event_for(&self, client_id: &ClientId) -> Option<StateEvent> {
        let client = self.clients.get(client_id)?;
        Some(StateEvent {
            active_start: client.active_start,
            timer_start: self.timer_start,
            admin_token: client.is_admin.then(|| self.admin_token.clone()),
        })
    }

    /// Number of clients that would receive a roster event right now.
    pub fn roster_subscriber_count(&self) -> usize {
        self.clients
            .values()
            .filter(|c| c.is_admin && c.outbox.is_some())
            .count()
    }

    pub(super) fn broadcast_roster(&self, event: RosterEvent) {
        for client in self.clients.values().filter(|c| c.is_admin) {
            if let Some(outbox) = &client.outbox {
                log_push_result(
                    outbox.push(event.clone().into()),
                    &self.id,
                    "roster",
                    client.id.as_str(),
                );
            }
        }
    }

    pub(super) fn send_state(&self, client_id: &ClientId) {
        let Some(event) = self.state_event_for(client_id) else {
            return;
        };
        let Some(outbox) = self.clients.get(client_id).and_then(|c| c.outbox.as_ref()) else {
            return;
        };
        log_push_result(
            outbox.push(event.into()),
            &self.id,
            "state",
            client_id.as_str(),
        );
    }

    /// State event to the client itself, roster event to the admins.
    pub(super) fn notify_client_changed(&self, client_id: &ClientId) {
        self.send_state(client_id);
        if let Some(client) = self.clients.get(client_id) {
            self.broadcast_roster(RosterEvent {
                client: client.snapshot(),
                removed: false,
            });
        }
    }

    /// Seed one client's queue with a roster event for every client in the room.
    pub(super) fn send_roster_snapshot(&self, client_id: &ClientId) {
        let Some(outbox) = self.clients.get(client_id).and_then(|c| c.outbox.as_ref()) else {
            return;
        };
        for client in self.clients.values() {
            let event = RosterEvent {
                client: client.snapshot(),
                removed: false,
            };
            log_push_result(
                outbox.push(event.into()),
                &self.id,
                "roster snapshot",
                client_id.as_str(),
            );
        }
    }

    /// Returns how many viewers accepted the event.
    pub(super) fn broadcast_control(&self, event: ControlEvent) -> usize {
        let mut delivered = 0;
        for outbox in self.viewers.values() {
            let result = outbox.push(event.clone());
            if result.is_ok() {
                delivered += 1;
            }
            log_push_result(result, &self.id, "control", "viewer");
        }
        delivered
    }
}

fn log_push_result(
    result: Result<(), PushError>,
    room_id: &RoomId,
    kind: &str,
    recipient: &str,
) {
    match result {
        Ok(()) => tracing::debug!("Queued {} event for '{}' in room '{}'", kind, recipient, room_id),
        Err(e) => tracing::warn!(
            "Dropped {} event for '{}' in room '{}': {}",
            kind,
            recipient,
            room_id,
            e
        ),
    }
}
