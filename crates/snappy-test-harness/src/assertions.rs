//! Custom assertions and assertion helpers for testing.

pub use assert_matches::assert_matches;
pub use pretty_assertions::{assert_eq, assert_ne};

/// Assert that a result is an error with a specific message
#[macro_export]
macro_rules! assert_error_contains {
    ($result:expr, $expected:expr) => {
        match $result {
            Ok(_) => panic!("Expected error but got Ok"),
            Err(e) => {
                let error_msg = format!("{}", e);
                assert!(
                    error_msg.contains($expected),
                    "Expected error message to contain '{}', but got: '{}'",
                    $expected,
                    error_msg
                );
            }
        }
    };
}

/// Assert that a facade resolves `key` to `expected` in its current locale.
#[macro_export]
macro_rules! assert_translates {
    ($i18n:expr, $key:expr, $expected:expr) => {
        match $i18n.t($key) {
            Ok(text) => $crate::pretty_assertions::assert_eq!(text, $expected),
            Err(e) => panic!("translating {:?} failed: {}", $key, e),
        }
    };
    ($i18n:expr, $key:expr, $params:expr, $expected:expr) => {
        match $i18n.t_with($key, &$params) {
            Ok(text) => $crate::pretty_assertions::assert_eq!(text, $expected),
            Err(e) => panic!("translating {:?} failed: {}", $key, e),
        }
    };
}

/// Assert that every locale in `locales` has text for every leaf key.
pub fn assert_complete(store: &snappy_i18n::TranslationStore, locales: &[&str]) {
    for locale in locales {
        let missing = store.missing_keys(locale);
        assert!(
            missing.is_empty(),
            "locale {locale} is missing translations for {missing:?}"
        );
    }
}
