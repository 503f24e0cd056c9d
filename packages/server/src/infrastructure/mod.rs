//! Infrastructure layer: shared-state storage, wire DTOs and background tasks.

pub mod dto;
pub mod repository;
pub mod sweeper;
