//! Conversion from domain events to wire DTOs.

use crate::domain::{ClientSnapshot, ControlEvent, RosterEvent, StateEvent, Timestamp};
use crate::infrastructure::dto::sse as dto;

fn unix_secs_or_zero(timestamp: Option<Timestamp>) -> i64 {
    timestamp.map_or(0, |t| t.as_unix_secs())
}

impl From<ClientSnapshot> for dto::ClientDto {
    fn from(model: ClientSnapshot) -> Self {
        Self {
            active: model.is_active(),
            active_start: unix_secs_or_zero(model.active_start),
            client_id: model.client_id.into_string(),
            name: model.name.as_str().to_string(),
            admin: model.is_admin,
        }
    }
}

impl From<RosterEvent> for dto::EventMessage {
    fn from(model: RosterEvent) -> Self {
        Self {
            admin_event: Some(dto::AdminEventDto {
                client: model.client.into(),
                remove: model.removed,
            }),
            standard_event: None,
        }
    }
}

impl From<StateEvent> for dto::EventMessage {
    fn from(model: StateEvent) -> Self {
        Self {
            admin_event: None,
            standard_event: Some(dto::StandardEventDto {
                active: model.is_active(),
                active_start: unix_secs_or_zero(model.active_start),
                timer_start: model.timer_start.as_unix_secs(),
                admin_secret: model
                    .admin_token
                    .map(|token| token.as_str().to_string())
                    .unwrap_or_default(),
            }),
        }
    }
}

impl From<ControlEvent> for dto::ControlMessage {
    fn from(model: ControlEvent) -> Self {
        Self {
            control: model.control.as_str().to_string(),
        }
    }
}
