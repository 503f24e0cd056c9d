//! Presence and turn-coordination server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin podium-server -- --key <SECRET>
//! cargo run --bin podium-server -- --key <SECRET> --host 0.0.0.0 --port 3000
//! ```

use std::{sync::Arc, time::Duration};

use clap::Parser;
use podium_server::{
    config::{MAX_QUEUE_CAPACITY, ServerConfig},
    domain::AdminTokenIssuer,
    infrastructure::repository::InMemoryRoomRepository,
    ui::{Server, state::AppState},
};
use podium_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "podium-server")]
#[command(about = "Room presence server with server-sent event streams", long_about = None)]
struct Args {
    /// Server-wide secret used to derive room admin tokens
    #[arg(long)]
    key: Option<String>,

    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "2000")]
    port: u16,

    /// Seconds between heartbeat comments on open streams
    #[arg(long, default_value = "15", value_parser = clap::value_parser!(u64).range(1..))]
    heartbeat_secs: u64,

    /// Seconds between liveness sweeps
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u64).range(1..))]
    sweep_interval_secs: u64,

    /// Seconds a client may go unseen before it is evicted
    #[arg(long, default_value = "30")]
    grace_secs: u64,

    /// Capacity of each session's outbound queue
    #[arg(
        long,
        default_value = "256",
        value_parser = clap::value_parser!(u64).range(1..=MAX_QUEUE_CAPACITY)
    )]
    queue_capacity: u64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    let Some(key) = args.key.filter(|k| !k.is_empty()) else {
        tracing::error!(
            "--key is required. For example, use a random key: --key {}",
            uuid::Uuid::new_v4().simple()
        );
        std::process::exit(1);
    };

    let config = ServerConfig {
        heartbeat: Duration::from_secs(args.heartbeat_secs),
        sweep_interval: Duration::from_secs(args.sweep_interval_secs),
        grace: Duration::from_secs(args.grace_secs),
        queue_capacity: usize::try_from(args.queue_capacity).unwrap_or(usize::MAX),
    };
    tracing::info!("Starting with {:?}", config);

    // 1. Repository (in-memory, guarded by the global lock)
    let repository = Arc::new(InMemoryRoomRepository::new(AdminTokenIssuer::new(key)));

    // 2. UseCases and shared state
    let state = AppState::build(repository, Arc::new(SystemClock), config);

    // 3. Run the server
    let server = Server::new(state);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
