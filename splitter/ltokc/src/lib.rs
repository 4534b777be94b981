//! Library surface of the `ltok` CLI.
//!
//! The binary in `main.rs` only parses arguments; everything it does is
//! implemented (and unit-tested) here in [`commands`].

use std::sync::Once;

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for CLI runs.
///
/// Enable with `RUST_LOG=ltokc=debug` or `RUST_LOG=ltokc=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
