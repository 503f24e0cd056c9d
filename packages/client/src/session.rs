//! A single connection to a room's control stream.

use futures_util::StreamExt;
use reqwest::{Url, header};
use serde::Deserialize;

use crate::{decoder::SseDecoder, error::ClientError, is_allowed_control};

/// Message pushed on the control stream
#[derive(Debug, Clone, Deserialize)]
pub struct ControlMessage {
    pub control: String,
}

/// Follow the control stream until it breaks, handing every allowed
/// control to `on_control`.
///
/// The stream is open-ended, so this only ever returns an error.
///
/// # Errors
///
/// * `ClientError::Connection` - the request failed, the server answered
///   with an error status or the stream ended
/// * `ClientError::Decode` - a message was not a control message
pub async fn run_present_session<F>(
    http: &reqwest::Client,
    endpoint: &Url,
    mut on_control: F,
) -> Result<(), ClientError>
where
    F: FnMut(&str),
{
    let response = http
        .get(endpoint.clone())
        .header(header::ACCEPT, "text/event-stream")
        .send()
        .await?
        .error_for_status()?;
    tracing::info!("Connected to {}", endpoint);

    let mut body = response.bytes_stream();
    let mut decoder = SseDecoder::new();
    while let Some(chunk) = body.next().await {
        for data in decoder.feed(&chunk?) {
            let message: ControlMessage = serde_json::from_str(&data)?;
            if is_allowed_control(&message.control) {
                tracing::debug!("Control received: {}", message.control);
                on_control(&message.control);
            } else {
                tracing::warn!("Invalid control: {}", message.control);
            }
        }
    }

    Err(ClientError::Connection(
        "stream closed by server".to_string(),
    ))
}
