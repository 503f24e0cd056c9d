//! Data Transfer Objects (DTOs) for the presence server.
//!
//! DTOs are organized by protocol:
//! - `http`: JSON request/response bodies and query strings
//! - `sse`: messages pushed on the event streams

pub mod conversion;
pub mod http;
pub mod sse;
