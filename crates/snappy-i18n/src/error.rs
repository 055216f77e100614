//! Error types for translation resolution.

use thiserror::Error;

/// Errors surfaced by the i18n facade and its components.
///
/// Missing keys are not errors: `t` degrades to the default translation or
/// the raw key instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// Construction options are malformed.
    #[error("invalid configuration: {0}")]
    ConfigValidation(String),

    /// A locale outside the supported set was requested.
    #[error("locale {0} is not supported")]
    UnsupportedLocale(String),

    /// A translation value is neither a string nor a nested mapping.
    #[error("invalid translation format for key \"{key}\" in locale \"{locale}\"")]
    Structure { key: String, locale: String },

    /// A resolved node is present but is not a string.
    #[error("translation for key \"{key}\" is not a string in locale \"{locale}\"")]
    TranslationType { key: String, locale: String },

    /// A plugin failed shape validation.
    #[error("invalid plugin: {0}")]
    PluginValidation(String),

    /// No installed plugin provides the requested capability.
    #[error("capability {0} is not installed")]
    CapabilityMissing(&'static str),
}

impl I18nError {
    /// Create a configuration validation error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigValidation(msg.into())
    }

    /// Create a structure error for `key` under `locale`.
    pub fn structure(key: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::Structure {
            key: key.into(),
            locale: locale.into(),
        }
    }
}

/// Result type alias using [`I18nError`].
pub type Result<T> = std::result::Result<T, I18nError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = I18nError::UnsupportedLocale("xx".to_string());
        assert_eq!(error.to_string(), "locale xx is not supported");

        let error = I18nError::structure("count", "en");
        assert_eq!(
            error.to_string(),
            "invalid translation format for key \"count\" in locale \"en\""
        );

        let error = I18nError::config("supported locales must be a non-empty list");
        assert_eq!(
            error.to_string(),
            "invalid configuration: supported locales must be a non-empty list"
        );

        let error = I18nError::CapabilityMissing("direction");
        assert_eq!(error.to_string(), "capability direction is not installed");
    }
}
