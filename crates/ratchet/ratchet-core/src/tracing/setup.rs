//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the Ratchet tracing/logging system.
///
/// Reads the `RATCHET_LOG` environment variable for per-crate log levels.
/// Format: `RATCHET_LOG=ratchet_check=debug,ratchet=info`
///
/// Falls back to info level for the Ratchet crates if `RATCHET_LOG` is not
/// set or is invalid. Output goes to stderr; stdout carries the report.
///
/// Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
