//! Tracing setup: subscriber initialization and span definitions.

pub mod spans;

use std::sync::Once;

use anynode_core::BridgeConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Filter used when `ANYNODE_LOG` is unset or does not parse.
pub const DEFAULT_FILTER: &str = "anynode_bridge=info";

/// Initialize the anynode tracing/logging system.
///
/// Reads the `ANYNODE_LOG` environment variable for filtering.
/// Format: `ANYNODE_LOG=anynode_bridge=debug`
///
/// Falls back to [`DEFAULT_FILTER`] if `ANYNODE_LOG` is not set or is invalid.
///
/// Idempotent. If another global subscriber is already installed, it is
/// left in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("ANYNODE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter);
}

/// Initialize tracing at the level named in `config.log_level`.
pub fn init_tracing_from_config(config: &BridgeConfig) {
    init_tracing_with_filter(&config.log_level);
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
