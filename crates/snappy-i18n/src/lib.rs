//! Translation resolution for snappy.
//!
//! An [`I18n`] facade resolves dotted keys (`common.hello`) against the
//! current locale, falling back to a fallback locale, then to a default
//! text, then to the key itself. A numeric `count` parameter selects a
//! plural form and `{{name}}` tokens are substituted from parameters.
//!
//! ```
//! use serde_json::json;
//! use snappy_i18n::{params, I18n, I18nConfig};
//!
//! let mut i18n = I18n::new(I18nConfig::new(["en", "es"], "en"))?;
//! i18n.add_translations("en", &json!({ "common": { "hello": "Hello, {{name}}!" } }))?;
//!
//! assert_eq!(i18n.t_with("common.hello", &params! { name = "John" })?, "Hello, John!");
//! # Ok::<(), snappy_i18n::I18nError>(())
//! ```
//!
//! Formatting concerns (dates, numbers, text direction) are attached as
//! plugins; see [`Plugin`].

pub mod config;
pub mod error;
pub mod i18n;
pub mod interpolate;
pub mod locale;
pub mod merge;
pub mod params;
pub mod plugin;
pub mod plural;
pub mod store;

pub use config::{I18nConfig, InterpolationConfig};
pub use error::{I18nError, Result};
pub use i18n::I18n;
pub use interpolate::Interpolator;
pub use locale::{is_valid_locale, is_valid_locale_list, language_of, Locale};
pub use merge::{merge, Merge, MergeStrategy};
pub use params::Params;
pub use plugin::{validate_plugin, Capabilities, Capability, Plugin, PluginHost};
pub use plural::{PluralCategory, PluralRule};
pub use store::{TranslationNode, TranslationStore, TranslationTree};

/// Translation macro.
///
/// `t!(i18n, "key")` resolves a key; `t!(i18n, "key", name = value, ...)`
/// also passes parameters.
#[macro_export]
macro_rules! t {
    ($i18n:expr, $key:expr) => {
        $i18n.t($key)
    };
    ($i18n:expr, $key:expr, $($name:ident = $value:expr),+ $(,)?) => {
        $i18n.t_with($key, &$crate::params! { $($name = $value),+ })
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn i18n() -> I18n {
        let mut i18n = I18n::new(I18nConfig::new(["en", "es"], "es")).unwrap();
        i18n.add_translations(
            "es",
            &json!({
                "app": { "welcome": "¡Bienvenido!" },
                "user": { "greeting": "Hola, {{name}}!", "inbox": "{{name}} tiene {{count}} mensajes" }
            }),
        )
        .unwrap();
        i18n
    }

    #[test]
    fn test_translation_macro() {
        let i18n = i18n();
        assert_eq!(t!(i18n, "app.welcome").unwrap(), "¡Bienvenido!");
        assert_eq!(t!(i18n, "missing.key").unwrap(), "missing.key");
        assert_eq!(t!(i18n, "user.greeting", name = "María").unwrap(), "Hola, María!");
    }

    #[test]
    fn test_translation_macro_multiple_params() {
        let i18n = i18n();
        let id = "Ana";
        // A numeric count also triggers the plural lookup; the candidate is kept.
        assert_eq!(
            t!(i18n, "user.inbox", name = id, count = 5).unwrap(),
            "Ana tiene 5 mensajes_other"
        );
    }
}
