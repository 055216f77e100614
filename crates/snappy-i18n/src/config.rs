//! Facade configuration.
//!
//! Options can be built in code or parsed from a YAML/JSON document that is
//! already in memory:
//!
//! ```yaml
//! supportedLocales: [en, ar, es]
//! defaultLocale: en
//! fallbackLocale: en
//! mergeStrategy: deep
//! warnOnMissing: true
//! interpolation:
//!   prefix: "{{"
//!   suffix: "}}"
//! translations:
//!   greet:
//!     en: Hello
//!     ar: مرحبا
//! ```
//!
//! Plugins cannot be expressed in a document and are attached with
//! [`I18nConfig::with_plugin`].

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{I18nError, Result};
use crate::locale::{is_valid_locale_list, Locale};
use crate::merge::MergeStrategy;
use crate::plugin::{validate_plugin, Plugin};
use crate::store::{TranslationNode, TranslationTree};

/// Token delimiters for interpolation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpolationConfig {
    /// Opening delimiter.
    pub prefix: String,
    /// Closing delimiter.
    pub suffix: String,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            prefix: "{{".to_string(),
            suffix: "}}".to_string(),
        }
    }
}

/// Construction options for [`crate::I18n`].
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    /// Locales the facade may switch to.
    pub supported_locales: Vec<Locale>,
    /// Initial locale.
    pub default_locale: Locale,
    /// Locale consulted when a key is missing (defaults to `default_locale`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_locale: Option<Locale>,
    /// Initial key-first translation tree.
    #[serde(default)]
    pub translations: TranslationTree,
    /// Strategy used by `merge_translations` when none is given.
    #[serde(default)]
    pub merge_strategy: MergeStrategy,
    /// Log a warning for keys missing in the current locale.
    #[serde(default)]
    pub warn_on_missing: bool,
    /// Token delimiters.
    #[serde(default)]
    pub interpolation: InterpolationConfig,
    /// Plugins installed in order at construction.
    #[serde(skip)]
    pub plugins: Vec<Arc<dyn Plugin>>,
}

impl fmt::Debug for I18nConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plugins: Vec<&str> = self.plugins.iter().map(|p| p.name()).collect();
        f.debug_struct("I18nConfig")
            .field("supported_locales", &self.supported_locales)
            .field("default_locale", &self.default_locale)
            .field("fallback_locale", &self.fallback_locale)
            .field("translations", &self.translations)
            .field("merge_strategy", &self.merge_strategy)
            .field("warn_on_missing", &self.warn_on_missing)
            .field("interpolation", &self.interpolation)
            .field("plugins", &plugins)
            .finish()
    }
}

impl I18nConfig {
    /// Minimal configuration: supported locales and the default locale.
    pub fn new<S: Into<Locale>>(
        supported_locales: impl IntoIterator<Item = S>,
        default_locale: impl Into<Locale>,
    ) -> Self {
        Self {
            supported_locales: supported_locales.into_iter().map(Into::into).collect(),
            default_locale: default_locale.into(),
            fallback_locale: None,
            translations: TranslationTree::new(),
            merge_strategy: MergeStrategy::default(),
            warn_on_missing: false,
            interpolation: InterpolationConfig::default(),
            plugins: Vec::new(),
        }
    }

    /// Set the fallback locale.
    pub fn with_fallback_locale(mut self, locale: impl Into<Locale>) -> Self {
        self.fallback_locale = Some(locale.into());
        self
    }

    /// Set the initial translation tree.
    pub fn with_translations(mut self, translations: TranslationTree) -> Self {
        self.translations = translations;
        self
    }

    /// Set the default merge strategy.
    pub fn with_merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.merge_strategy = strategy;
        self
    }

    /// Toggle missing-key warnings.
    pub fn warn_on_missing(mut self, enabled: bool) -> Self {
        self.warn_on_missing = enabled;
        self
    }

    /// Set the interpolation delimiters.
    pub fn with_interpolation(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.interpolation = InterpolationConfig {
            prefix: prefix.into(),
            suffix: suffix.into(),
        };
        self
    }

    /// Append a plugin to install at construction.
    pub fn with_plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Arc::new(plugin));
        self
    }

    /// Effective fallback locale.
    pub fn fallback_locale(&self) -> &str {
        self.fallback_locale
            .as_deref()
            .unwrap_or(&self.default_locale)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| {
            let line = e
                .location()
                .map(|l| l.line().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            I18nError::config(format!("invalid YAML at line {line}: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| I18nError::config(format!("invalid JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every construction invariant.
    pub fn validate(&self) -> Result<()> {
        if self.supported_locales.is_empty() {
            return Err(I18nError::config(
                "supported locales must be a non-empty list",
            ));
        }

        if !is_valid_locale_list(&self.supported_locales) {
            return Err(I18nError::config(
                "invalid locale format in supported locales",
            ));
        }

        if !self.supports(&self.default_locale) {
            return Err(I18nError::config(format!(
                "default locale {} is not supported",
                self.default_locale
            )));
        }

        if let Some(fallback) = &self.fallback_locale {
            if !self.supports(fallback) {
                return Err(I18nError::config(format!(
                    "fallback locale {fallback} is not supported"
                )));
            }
        }

        if let Some(locale) = first_unsupported_locale(&self.translations, self) {
            return Err(I18nError::config(format!(
                "translations for locale {locale} are not supported"
            )));
        }

        if self.interpolation.prefix.is_empty() || self.interpolation.suffix.is_empty() {
            return Err(I18nError::config(
                "interpolation prefix and suffix must not be empty",
            ));
        }

        for plugin in &self.plugins {
            validate_plugin(plugin.as_ref()).map_err(|e| I18nError::config(e.to_string()))?;
        }

        Ok(())
    }

    fn supports(&self, locale: &str) -> bool {
        self.supported_locales.iter().any(|l| l == locale)
    }
}

fn first_unsupported_locale<'a>(tree: &'a TranslationTree, config: &I18nConfig) -> Option<&'a str> {
    tree.values().find_map(|node| match node {
        TranslationNode::Leaf(values) => values
            .keys()
            .find(|locale| !config.supports(locale.as_str()))
            .map(String::as_str),
        TranslationNode::Branch(children) => first_unsupported_locale(children, config),
    })
}
