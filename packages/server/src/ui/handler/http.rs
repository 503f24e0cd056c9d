//! HTTP API endpoint handlers.
//!
//! Action endpoints answer `200` with an empty body on success.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    domain::{ClientId, ControlSignal, DisplayName, RoomId},
    infrastructure::dto::http::{
        ActiveRequest, AdminRequest, AnnounceRequest, ControlRequest, CreateResponse,
        RemoveRequest, ResetRequest, non_empty,
    },
    ui::{error::ApiError, state::AppState},
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `POST /api/create`
pub async fn create_room(State(state): State<Arc<AppState>>) -> Json<CreateResponse> {
    let created = state.create_room_usecase.execute().await;
    Json(CreateResponse {
        room_id: created.room_id.into_string(),
        admin_secret: created.admin_token.as_str().to_string(),
    })
}

/// `POST /api/active`
pub async fn set_active(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ActiveRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(req) = payload?;
    state
        .set_active_usecase
        .execute(
            RoomId::new(req.room_id),
            non_empty(req.admin_secret),
            ClientId::new(req.client_id),
            req.active,
            req.solo,
        )
        .await?;
    Ok(StatusCode::OK)
}

/// `POST /api/admin`
pub async fn grant_admin(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AdminRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(req) = payload?;
    state
        .grant_admin_usecase
        .execute(
            RoomId::new(req.room_id),
            non_empty(req.admin_secret),
            ClientId::new(req.client_id),
        )
        .await?;
    Ok(StatusCode::OK)
}

/// `POST /api/announce`
pub async fn announce(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnnounceRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(req) = payload?;
    let name = DisplayName::new(req.name)?;
    state
        .announce_usecase
        .execute(
            RoomId::new(req.room_id),
            ClientId::new(req.client_id),
            name,
            non_empty(req.admin_secret),
        )
        .await?;
    Ok(StatusCode::OK)
}

/// `POST /api/control`
pub async fn send_control(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ControlRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(req) = payload?;
    let control = ControlSignal::new(req.control)?;
    state
        .send_control_usecase
        .execute(RoomId::new(req.room_id), ClientId::new(req.client_id), control)
        .await?;
    Ok(StatusCode::OK)
}

/// `POST /api/remove`
pub async fn remove_client(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RemoveRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(req) = payload?;
    state
        .remove_client_usecase
        .execute(RoomId::new(req.room_id), ClientId::new(req.client_id))
        .await;
    Ok(StatusCode::OK)
}

/// `POST /api/reset`
pub async fn reset_timer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ResetRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(req) = payload?;
    state
        .reset_timer_usecase
        .execute(RoomId::new(req.room_id), non_empty(req.admin_secret))
        .await?;
    Ok(StatusCode::OK)
}
