//! Presentation viewer for Podium rooms.
//!
//! Follows a room's control stream and prints every allowed control, one
//! per line, so it can be piped into whatever drives the slides.

pub mod decoder;
pub mod endpoint;
pub mod error;
pub mod runner;
pub mod session;

/// Controls that are passed through; anything else is reported and skipped.
pub const ALLOWED_CONTROLS: [&str; 2] = ["left", "right"];

pub fn is_allowed_control(control: &str) -> bool {
    ALLOWED_CONTROLS.contains(&control)
}
