//! Viewer execution logic with reconnection support.

use std::time::Duration;

use reqwest::Url;

use super::session::run_present_session;

const RECONNECT_INTERVAL_SECS: u64 = 2;

/// Follow the control stream forever, reconnecting after every failure.
pub async fn run_presenter(endpoint: Url) {
    let http = reqwest::Client::new();

    loop {
        tracing::info!("Attempting to connect to {}", endpoint);

        if let Err(e) = run_present_session(&http, &endpoint, |control| println!("{control}")).await
        {
            tracing::warn!("Connection lost: {}", e);
        }

        tracing::info!("Reconnecting in {} seconds...", RECONNECT_INTERVAL_SECS);
        tokio::time::sleep(Duration::from_secs(RECONNECT_INTERVAL_SECS)).await;
    }
}
