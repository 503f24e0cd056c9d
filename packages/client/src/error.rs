//! Error types for the presentation viewer.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The room URL cannot be turned into a stream endpoint
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// A pushed message was not a control message
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::Connection(error.to_string())
    }
}
