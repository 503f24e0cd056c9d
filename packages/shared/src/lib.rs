//! Utilities shared by the Podium server and the presentation viewer.

pub mod logger;
pub mod time;
