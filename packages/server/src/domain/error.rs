//! Domain error types.

use thiserror::Error;

use super::value_object::ClientId;

/// Failures of room-scoped actions. None of them leave a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    /// Admin token missing or not matching the room's token.
    #[error("invalid admin_secret")]
    Unauthorized,

    /// The action requires a client that is not in the roster.
    #[error("invalid client_id '{0}'")]
    InvalidClient(ClientId),

    /// Control signals may only come from the client holding the floor.
    #[error("client '{0}' is not active")]
    NotActive(ClientId),
}

/// Validation errors raised while constructing value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("name is too long ({len} characters, at most {max} allowed)")]
    DisplayNameTooLong { len: usize, max: usize },

    #[error("control must not be empty")]
    EmptyControlSignal,

    #[error("control is too long ({len} characters, at most {max} allowed)")]
    ControlSignalTooLong { len: usize, max: usize },
}
