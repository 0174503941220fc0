//! Kiln command-line driver.
//!
//! The binary in `main.rs` is a thin shell over [`commands`]; everything
//! that can fail returns a [`CommandError`] so it can be tested without
//! spawning a process.

pub mod commands;
mod options;

use std::sync::Once;

pub use commands::{CheckSummary, CommandError};
pub use options::CliOptions;

static TRACING_INIT: Once = Once::new();

/// Install the global `tracing` subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so normal runs print only the
/// program's result. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
