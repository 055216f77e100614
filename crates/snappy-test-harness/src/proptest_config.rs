//! Property testing configuration.
//!
//! `SNAPPY_PROPTEST_PROFILE=quick` trims runs during development and
//! `SNAPPY_PROPTEST_PROFILE=ci` widens them in CI.

use proptest::test_runner::{Config, FileFailurePersistence};

/// Default configuration for workspace property tests.
pub fn standard_config() -> Config {
    Config {
        cases: 256,
        max_shrink_iters: 10_000,
        failure_persistence: Some(Box::new(FileFailurePersistence::WithSource(
            "proptest-regressions",
        ))),
        ..Config::default()
    }
}

/// Fewer cases for local iteration.
pub fn quick_config() -> Config {
    Config {
        cases: 32,
        max_shrink_iters: 1_000,
        ..standard_config()
    }
}

/// More cases for CI.
pub fn ci_config() -> Config {
    Config {
        cases: 1_024,
        max_shrink_iters: 50_000,
        ..standard_config()
    }
}

/// Configuration selected by `SNAPPY_PROPTEST_PROFILE`.
pub fn env_config() -> Config {
    match std::env::var("SNAPPY_PROPTEST_PROFILE").ok().as_deref() {
        Some("quick") => quick_config(),
        Some("ci") => ci_config(),
        _ => standard_config(),
    }
}
