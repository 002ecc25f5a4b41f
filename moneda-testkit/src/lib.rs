//! Test helpers for Moneda integration tests.
//!
//! Provides a pre-seeded currency registry, a conversion context with
//! deterministic rate tables, and small construction shortcuts.

mod helpers;

pub use helpers::{demo_conversions, demo_registry, money};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for tests, honoring `RUST_LOG`.
///
/// Safe to call from every test; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
