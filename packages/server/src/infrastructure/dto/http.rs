//! HTTP request and response DTOs.
//!
//! An empty `admin_secret` is treated the same as a missing one.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/active`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveRequest {
    pub room_id: String,
    #[serde(default)]
    pub admin_secret: Option<String>,
    pub client_id: String,
    pub active: bool,
    #[serde(default)]
    pub solo: bool,
}

/// Body of `POST /api/admin`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminRequest {
    pub room_id: String,
    #[serde(default)]
    pub admin_secret: Option<String>,
    pub client_id: String,
}

/// Body of `POST /api/announce`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnounceRequest {
    pub room_id: String,
    pub client_id: String,
    #[serde(default)]
    pub admin_secret: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// Body of `POST /api/control`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlRequest {
    pub room_id: String,
    pub client_id: String,
    pub control: String,
}

/// Body of `POST /api/remove`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveRequest {
    pub room_id: String,
    pub client_id: String,
}

/// Body of `POST /api/reset`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetRequest {
    pub room_id: String,
    #[serde(default)]
    pub admin_secret: Option<String>,
}

/// Response of `POST /api/create`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResponse {
    pub room_id: String,
    pub admin_secret: String,
}

/// Query of `GET /api/watch`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchQuery {
    pub room_id: String,
    pub client_id: String,
    #[serde(default)]
    pub admin_secret: Option<String>,
}

/// Query of `GET /api/present`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentQuery {
    pub room_id: String,
}

/// Error body returned with every 4xx response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Drop empty strings so `""` and a missing field mean the same thing.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
