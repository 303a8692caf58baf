//! Tracing setup for the binary
//!
//! Configure via RUST_LOG:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=fire_notepad::session=debug` - module-level filtering

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install a stderr subscriber. Defaults to `warn` when RUST_LOG is unset.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
