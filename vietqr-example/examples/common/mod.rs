//! Common utilities shared across examples.

#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Initializes tracing with an env-filter (`RUST_LOG`), defaulting to info.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
