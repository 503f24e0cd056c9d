//! Presentation viewer.
//!
//! Follows the control stream of the room named by a share URL and prints
//! each allowed control (`left` / `right`) on its own line. Reconnects every
//! 2 seconds while the server is unreachable.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin podium-present -- "http://127.0.0.1:2000/?room=<room_id>"
//! ```

use clap::Parser;

use podium_client::{endpoint::present_endpoint, runner::run_presenter};
use podium_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "podium-present")]
#[command(about = "Print the slide controls pushed to a Podium room", long_about = None)]
struct Args {
    /// Room share URL carrying `?room=<room_id>`
    url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    let endpoint = match present_endpoint(&args.url) {
        Ok(endpoint) => endpoint,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    run_presenter(endpoint).await;
}
