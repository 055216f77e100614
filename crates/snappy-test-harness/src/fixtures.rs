//! Shared configurations and translation structures.

use serde_json::{json, Value};
use snappy_i18n::{I18n, I18nConfig};

/// Locales used by the sample configuration.
pub const SAMPLE_LOCALES: [&str; 5] = ["en", "ar", "es", "fr", "he"];

/// English fallback, missing-key warnings on.
pub fn sample_config() -> I18nConfig {
    I18nConfig::new(SAMPLE_LOCALES, "en")
        .with_fallback_locale("en")
        .warn_on_missing(true)
}

/// English translations with nested keys and plural forms.
pub fn english_structure() -> Value {
    json!({
        "common": {
            "hello": "Hello, {{name}}!",
            "items_one": "{{count}} item",
            "items_other": "{{count}} items",
            "nested": {
                "message": "This is nested"
            }
        }
    })
}

/// Spanish translations, deliberately incomplete.
pub fn spanish_structure() -> Value {
    json!({
        "common": {
            "hello": "¡Hola, {{name}}!",
            "items": "{{count}} artículo | {{count}} artículos"
        }
    })
}

/// A facade built from [`sample_config`] with the English and Spanish
/// structures loaded.
pub fn sample_i18n() -> I18n {
    try_sample_i18n().unwrap_or_else(|e| panic!("sample fixture is invalid: {e}"))
}

fn try_sample_i18n() -> snappy_i18n::Result<I18n> {
    let mut i18n = I18n::new(sample_config())?;
    i18n.add_translations("en", &english_structure())?;
    i18n.add_translations("es", &spanish_structure())?;
    Ok(i18n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_i18n() {
        let i18n = sample_i18n();
        assert_eq!(i18n.locale(), "en");
        assert_eq!(i18n.supported_locales(), SAMPLE_LOCALES);
        assert_eq!(i18n.get_translation("common.nested.message", "en"), Some("This is nested"));
        assert_eq!(i18n.get_translation("common.items", "es"), Some("{{count}} artículo | {{count}} artículos"));
    }
}
