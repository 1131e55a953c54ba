//! Tracing setup.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a stderr tracing subscriber, once per process.
///
/// Enable with `RUST_LOG=monkey_scanner=trace` (every token) or
/// `RUST_LOG=monkey_repl=debug` (per-line summaries). Without `RUST_LOG`
/// nothing is installed, so stdout stays reserved for tokens.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
