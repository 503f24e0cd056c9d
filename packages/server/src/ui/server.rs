//! Server execution logic.

use std::{future::Future, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::infrastructure::sweeper::spawn_sweeper;

use super::{
    handler::{
        announce, create_room, grant_admin, health_check, present_stream, remove_client,
        reset_timer, send_control, set_active, watch_stream,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Build the full API router over the given state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // actions
        .route("/api/create", post(create_room))
        .route("/api/active", post(set_active))
        .route("/api/admin", post(grant_admin))
        .route("/api/announce", post(announce))
        .route("/api/control", post(send_control))
        .route("/api/remove", post(remove_client))
        .route("/api/reset", post(reset_timer))
        // streams
        .route("/api/watch", get(watch_stream))
        .route("/api/present", get(present_stream))
        .route("/api/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Presence server
///
/// Owns the application state and runs the HTTP listener together with the
/// liveness sweeper.
///
/// # Example
///
/// ```ignore
/// let state = AppState::build(repository, Arc::new(SystemClock), ServerConfig::default());
/// Server::new(state).run("127.0.0.1".to_string(), 2000).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Bind to `host:port` and serve until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Presence server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await?;
        Ok(())
    }

    /// Serve on an already bound listener until `signal` resolves.
    ///
    /// When the signal fires every open stream is told to finish, so the
    /// graceful shutdown is not held up by idle subscribers.
    pub async fn serve<F>(self, listener: TcpListener, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let sweeper = spawn_sweeper(
            self.state.evict_stale_clients_usecase.clone(),
            self.state.config.sweep_interval,
            self.state.shutdown.subscribe(),
        );

        let state = self.state.clone();
        let app = self.router();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                signal.await;
                state.shutdown.send_replace(true);
            })
            .await?;

        if let Err(e) = sweeper.await {
            tracing::error!("Sweeper task failed: {}", e);
        }
        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
