//! Request handlers.

mod http;
mod sse;

pub use http::{
    announce, create_room, grant_admin, health_check, remove_client, reset_timer, send_control,
    set_active,
};
pub use sse::{present_stream, watch_stream};
