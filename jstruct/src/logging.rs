//! Tracing setup for binaries built on this crate.
//!
//! The library only emits events (`tracing::debug!` and friends). Nothing is
//! printed unless the host program installs a subscriber, e.g. via [`init`].

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize a tracing subscriber writing compact lines to stderr.
///
/// Reads `RUST_LOG`, falling back to `default_filter` when unset or invalid.
///
/// # Example
/// ```bash
/// RUST_LOG=jstruct=debug cargo run -p demo
/// ```
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
