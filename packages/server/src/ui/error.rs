//! Client-facing API errors.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    domain::{RoomError, ValueObjectError},
    infrastructure::dto::http::ErrorResponse,
};

/// Every failure a request can end in. All of them are 4xx.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("invalid admin_secret")]
    Unauthorized,

    #[error("invalid client_id '{0}'")]
    InvalidClient(String),

    #[error("client '{0}' is not active")]
    NotActive(String),

    #[error("streaming unsupported")]
    StreamingUnsupported,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidClient(_) | Self::NotActive(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::StreamingUnsupported => StatusCode::NOT_ACCEPTABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!("Request rejected ({}): {}", status, self);
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<RoomError> for ApiError {
    fn from(error: RoomError) -> Self {
        match error {
            RoomError::Unauthorized => Self::Unauthorized,
            RoomError::InvalidClient(client_id) => Self::InvalidClient(client_id.into_string()),
            RoomError::NotActive(client_id) => Self::NotActive(client_id.into_string()),
        }
    }
}

impl From<ValueObjectError> for ApiError {
    fn from(error: ValueObjectError) -> Self {
        Self::BadRequest(error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
