//! Presence and turn-coordination server.
//!
//! Clients join rooms, admins toggle who holds the floor, and every change
//! is pushed to subscribers over server-sent event streams.

pub mod config;

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
