//! Logging setup utilities for the Podium binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// Sets up logging for both the library crates and the binary.
/// The log level can be overridden using the `RUST_LOG` environment variable.
/// Logs go to stderr so stdout stays free for program output.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "podium-server", "podium-present")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use podium_shared::logger::setup_logger;
///
/// setup_logger("podium-server", "info");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "podium_shared={level},podium_server={level},podium_client={level},{bin}={level},tower_http={level}",
                    level = default_log_level,
                    bin = binary_name.replace('-', "_"),
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
