//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! family tree test suite.
//!
//! # Modules
//!
//! - `fixtures`: Deterministic identifiers and test constants
//! - `builders`: Builder patterns for test data construction
//! - `store`: Seeded in-memory stores for common scenarios
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;
pub mod store;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
pub use store::*;

use once_cell::sync::OnceCell;

/// Initializes tracing for test binaries, once per process.
///
/// Honours `RUST_LOG`; silent by default.
pub fn init_test_logging() {
    static INIT: OnceCell<()> = OnceCell::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
