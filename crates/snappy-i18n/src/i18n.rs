//! The translation facade.

use std::sync::Arc;

use serde_json::Value;
use snappy_common_log::spans::{load_span, plugin_span, record_error, translation_span};
use tracing::{debug, trace, warn};

use crate::config::I18nConfig;
use crate::error::{I18nError, Result};
use crate::interpolate::Interpolator;
use crate::locale::{is_valid_locale, Locale};
use crate::merge::MergeStrategy;
use crate::params::Params;
use crate::plugin::{Capabilities, Capability, Plugin, PluginHost};
use crate::plural;
use crate::store::{TranslationNode, TranslationStore, TranslationTree};

/// Resolves dotted keys against the active locale.
///
/// Each facade is an independently owned value. Mutation goes through
/// `&mut self`; share one across threads behind a lock.
#[derive(Debug, Clone)]
pub struct I18n {
    locale: Locale,
    supported_locales: Vec<Locale>,
    default_locale: Locale,
    fallback_locale: Locale,
    store: TranslationStore,
    merge_strategy: MergeStrategy,
    warn_on_missing: bool,
    interpolator: Interpolator,
    host: PluginHost,
}

impl I18n {
    /// Validate `config` and build a facade, installing its plugins in order.
    pub fn new(config: I18nConfig) -> Result<Self> {
        config.validate()?;

        let fallback_locale = config.fallback_locale().to_string();
        let interpolator = Interpolator::from_config(&config.interpolation)?;

        let mut i18n = Self {
            locale: config.default_locale.clone(),
            supported_locales: config.supported_locales,
            default_locale: config.default_locale,
            fallback_locale,
            store: TranslationStore::from_tree(config.translations),
            merge_strategy: config.merge_strategy,
            warn_on_missing: config.warn_on_missing,
            interpolator,
            host: PluginHost::new(),
        };

        for plugin in &config.plugins {
            i18n.add_plugin(plugin.as_ref())?;
        }

        debug!(
            locale = %i18n.locale,
            supported = ?i18n.supported_locales,
            plugins = ?i18n.plugins(),
            "i18n initialized"
        );
        Ok(i18n)
    }

    /// Current locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Switch the current locale.
    pub fn set_locale(&mut self, locale: &str) -> Result<()> {
        if !self.supports(locale) {
            return Err(I18nError::UnsupportedLocale(locale.to_string()));
        }

        debug!(from = %self.locale, to = %locale, "locale changed");
        self.locale = locale.to_string();
        Ok(())
    }

    /// Locale selected at construction.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Locale consulted when the current one has no translation.
    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    /// Locales accepted by [`I18n::set_locale`].
    pub fn supported_locales(&self) -> &[Locale] {
        &self.supported_locales
    }

    /// Add a per-locale structure to the translation tree.
    ///
    /// The locale must be well-formed or supported. Strings become
    /// translations and nested mappings become key segments; anything else
    /// fails with [`I18nError::Structure`] and leaves the tree unchanged.
    pub fn add_translations(&mut self, locale: &str, structure: &Value) -> Result<()> {
        if !is_valid_locale(locale) && !self.supports(locale) {
            return Err(I18nError::UnsupportedLocale(locale.to_string()));
        }

        let _span = load_span(locale).entered();
        if let Err(error) = self.store.insert(locale, structure) {
            record_error(&error);
            return Err(error);
        }
        debug!(keys = self.store.len(), "translations added");
        Ok(())
    }

    /// Merge a key-first tree into the translations.
    ///
    /// Without a strategy the configured one applies.
    pub fn merge_translations(&mut self, tree: TranslationTree, strategy: Option<MergeStrategy>) {
        let strategy = strategy.unwrap_or(self.merge_strategy);
        debug!(%strategy, "merging translations");
        self.store.merge(tree, strategy);
    }

    /// Text stored for `key` in `locale`, without fallback.
    pub fn get_translation(&self, key: &str, locale: &str) -> Option<&str> {
        self.store.get(key, locale)
    }

    /// The translation store.
    pub fn translations(&self) -> &TranslationStore {
        &self.store
    }

    /// Resolve `key` in the current locale.
    ///
    /// A missing key falls back to the fallback locale, then to `default`,
    /// then to the key itself. With a numeric `count` parameter the resolved
    /// text is suffixed with its plural category and looked up again in the
    /// current locale. Parameters are substituted last.
    ///
    /// Fails only when `key` names a group of keys rather than a single
    /// translation and no `default` is given.
    pub fn translate(&self, key: &str, params: Option<&Params>, default: Option<&str>) -> Result<String> {
        let _span = translation_span(key, &self.locale).entered();

        let mut text = match self.store.get(key, &self.locale) {
            Some(text) => text.to_string(),
            None => {
                if self.warn_on_missing {
                    warn!(key = %key, locale = %self.locale, "translation not found");
                }

                match self.store.get(key, &self.fallback_locale) {
                    Some(text) => {
                        trace!(fallback = %self.fallback_locale, "resolved from fallback locale");
                        text.to_string()
                    }
                    None => match (default, self.store.node(key)) {
                        (Some(default), _) => default.to_string(),
                        (None, Some(TranslationNode::Branch(_))) => {
                            let error = I18nError::TranslationType {
                                key: key.to_string(),
                                locale: self.locale.clone(),
                            };
                            record_error(&error);
                            return Err(error);
                        }
                        (None, _) => key.to_string(),
                    },
                }
            }
        };

        if let Some(count) = params.and_then(Params::count) {
            let candidate = self.pluralize(&text, count);
            trace!(%candidate, "plural candidate");
            text = match self.store.get(&candidate, &self.locale) {
                Some(plural) => plural.to_string(),
                None => candidate,
            };
        }

        Ok(self.interpolator.interpolate(&text, params))
    }

    /// Resolve `key` without parameters.
    pub fn t(&self, key: &str) -> Result<String> {
        self.translate(key, None, None)
    }

    /// Resolve `key` with parameters.
    pub fn t_with(&self, key: &str, params: &Params) -> Result<String> {
        self.translate(key, Some(params), None)
    }

    /// `text` suffixed with the plural category of `count` in the current locale.
    pub fn pluralize(&self, text: &str, count: f64) -> String {
        plural::suffix(&self.locale, text, count)
    }

    /// Substitute `params` into `text` with the configured delimiters.
    pub fn interpolate(&self, text: &str, params: Option<&Params>) -> String {
        self.interpolator.interpolate(text, params)
    }

    /// Validate and install a plugin.
    pub fn add_plugin(&mut self, plugin: &dyn Plugin) -> Result<()> {
        let _span = plugin_span(plugin.name()).entered();
        self.host.install(plugin).map_err(|error| {
            record_error(&error);
            error
        })
    }

    /// Install a plugin, builder style.
    pub fn with_plugin(mut self, plugin: impl Plugin) -> Result<Self> {
        self.add_plugin(&plugin)?;
        Ok(self)
    }

    /// Names of installed plugins, in installation order.
    pub fn plugins(&self) -> &[String] {
        self.host.installed()
    }

    /// Capabilities attached by installed plugins.
    pub fn capabilities(&self) -> &Capabilities {
        self.host.capabilities()
    }

    /// Look up a capability, failing with [`I18nError::CapabilityMissing`]
    /// when no installed plugin provides it.
    pub fn capability<C: Capability + ?Sized>(&self) -> Result<Arc<C>> {
        self.host.capabilities().require::<C>()
    }

    fn supports(&self, locale: &str) -> bool {
        self.supported_locales.iter().any(|l| l == locale)
    }
}
