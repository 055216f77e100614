//! Span helpers shared by the i18n crates.
//!
//! Every span declares an empty `error` field that [`record_error`] fills.

use tracing::field::{display, Empty};
use tracing::{debug_span, Span};

/// Create a span for resolving one translation key.
pub fn translation_span(key: &str, locale: &str) -> Span {
    debug_span!("translate", key = %key, locale = %locale, error = Empty)
}

/// Create a span for installing a plugin.
pub fn plugin_span(name: &str) -> Span {
    debug_span!("plugin", name = %name, error = Empty)
}

/// Create a span for loading translations into a locale.
pub fn load_span(locale: &str) -> Span {
    debug_span!("load", locale = %locale, error = Empty)
}

/// Record an error on the current span.
pub fn record_error(error: &dyn std::error::Error) {
    Span::current().record("error", display(error));
}
