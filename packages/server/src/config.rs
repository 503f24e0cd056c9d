//! Runtime tunables for the server.

use std::time::Duration;

/// Largest per-session queue capacity accepted from the command line.
pub const MAX_QUEUE_CAPACITY: u64 = 1 << 20;

/// Timing and sizing knobs shared by the sessions and the sweeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Idle interval after which a session emits a heartbeat comment.
    pub heartbeat: Duration,
    /// How often the sweeper runs.
    pub sweep_interval: Duration,
    /// How long a client may go unseen before it is evicted.
    pub grace: Duration,
    /// Capacity of each session's outbound queue.
    pub queue_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            heartbeat: Duration::from_secs(15),
            sweep_interval: Duration::from_secs(5),
            grace: Duration::from_secs(30),
            queue_capacity: 256,
        }
    }
}
