//! Tracing subscriber setup.
//!
//! Reads the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,contact_relay=debug";

/// Install the global fmt subscriber. Call once, at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .init();
}
