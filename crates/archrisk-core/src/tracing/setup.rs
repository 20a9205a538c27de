//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the archrisk tracing/logging system.
///
/// Reads `ARCHRISK_LOG` for per-module log levels, e.g.
/// `ARCHRISK_LOG=archrisk_analysis::runner=debug`.
/// Falls back to `archrisk=info` when unset or invalid.
///
/// Safe to call more than once; only the first call installs a subscriber.
/// If the host already installed a global subscriber, that one is kept and
/// the failure is reported on stderr.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ARCHRISK_LOG")
            .unwrap_or_else(|_| EnvFilter::new("archrisk=info"));

        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
        if let Err(err) = installed {
            eprintln!("archrisk: tracing subscriber not installed: {err}");
        }
    });
}
