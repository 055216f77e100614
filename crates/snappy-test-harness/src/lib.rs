//! Shared test tooling for the snappy-i18n crates.
//!
//! Provides a test tracing subscriber, fixtures (sample configurations and
//! translation structures), proptest strategies, and assertion helpers.

pub mod assertions;
pub mod fixtures;
pub mod proptest_config;
pub mod strategies;

pub use assert_matches::assert_matches;
pub use pretty_assertions;
pub use test_case::test_case;

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

/// Initialize tracing for tests.
///
/// Safe to call from every test; only the first call installs the
/// subscriber.
pub fn init() {
    static INIT: Lazy<()> = Lazy::new(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,snappy_i18n=debug,snappy_i18n_plugins=debug"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_file(true)
            .with_line_number(true)
            .try_init()
            .ok();
    });

    Lazy::force(&INIT);
}
