//! HTTP and server-sent event surface.

mod error;
mod handler;
mod server;
mod signal;
pub mod state;

pub use error::ApiError;
pub use server::{Server, build_router};
pub use signal::shutdown_signal;
