//! Tracing/logging initialization.
//!
//! The workflow crates emit structured diagnostics through `tracing`; the
//! subscriber installed here is the injected sink for all of them. Embedders
//! that install their own subscriber simply skip calling this.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// JSON output, `RUST_LOG`-configurable filtering, `info` by default.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
