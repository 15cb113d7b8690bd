// SPDX-License-Identifier: MPL-2.0
//! Console logging setup.
//!
//! The engine only emits `tracing` events; installing a subscriber is left to
//! the binary (or to tests that want to see the output).

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "iced_toast=info";

/// Installs the global fmt subscriber, honoring `RUST_LOG` when set.
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .compact()
        .try_init();
}
