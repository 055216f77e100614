//! Plugin installation and the capability registry.
//!
//! A plugin attaches capabilities (typed trait objects) to the facade when
//! it is installed. Each plugin crate pairs its capability trait with an
//! extension trait on [`crate::I18n`], so callers see the extended surface
//! as ordinary methods once the extension trait is in scope:
//!
//! ```ignore
//! use snappy_i18n_plugins::DirectionExt;
//!
//! i18n.add_plugin(&DirectionPlugin)?;
//! assert!(i18n.is_rtl(Some("ar"))?);
//! ```
//!
//! Installing a second provider of the same capability replaces the first.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{I18nError, Result};

/// An extension installed onto the facade.
pub trait Plugin: Send + Sync {
    /// Plugin name (non-blank, no whitespace).
    fn name(&self) -> &str;

    /// Attach this plugin's capabilities.
    fn install(&self, capabilities: &mut Capabilities) -> Result<()>;
}

/// A trait-object type that can be stored in [`Capabilities`].
///
/// Implemented for `dyn SomeCapability` by the crate defining the trait.
pub trait Capability: Send + Sync + 'static {
    /// Name reported in listings and in [`I18nError::CapabilityMissing`].
    const NAME: &'static str;
}

/// Check a plugin's shape before it is installed.
pub fn validate_plugin(plugin: &dyn Plugin) -> Result<()> {
    let name = plugin.name();

    if name.trim().is_empty() {
        return Err(I18nError::PluginValidation(
            "plugin must have a non-empty name".to_string(),
        ));
    }

    if name.chars().any(char::is_whitespace) {
        return Err(I18nError::PluginValidation(format!(
            "plugin name \"{name}\" must not contain whitespace"
        )));
    }

    Ok(())
}

#[derive(Clone)]
struct Entry {
    name: &'static str,
    provider: String,
    value: Arc<dyn Any + Send + Sync>,
}

/// Capabilities attached by installed plugins, keyed by type.
#[derive(Clone, Default)]
pub struct Capabilities {
    entries: HashMap<TypeId, Entry>,
    provider: String,
}

impl Capabilities {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a capability, replacing any previous provider.
    ///
    /// Returns the name of the plugin that provided it before, if any.
    pub fn insert<C: Capability + ?Sized>(&mut self, capability: Arc<C>) -> Option<String> {
        let entry = Entry {
            name: C::NAME,
            provider: self.provider.clone(),
            value: Arc::new(capability),
        };

        let previous = self
            .entries
            .insert(TypeId::of::<C>(), entry)
            .map(|old| old.provider);

        if let Some(old) = &previous {
            debug!(
                capability = C::NAME,
                previous = %old,
                provider = %self.provider,
                "capability overridden"
            );
        }

        previous
    }

    /// Look up a capability.
    pub fn get<C: Capability + ?Sized>(&self) -> Option<Arc<C>> {
        self.entries
            .get(&TypeId::of::<C>())
            .and_then(|entry| entry.value.downcast_ref::<Arc<C>>())
            .cloned()
    }

    /// Look up a capability, failing when no plugin provides it.
    pub fn require<C: Capability + ?Sized>(&self) -> Result<Arc<C>> {
        self.get::<C>().ok_or(I18nError::CapabilityMissing(C::NAME))
    }

    /// Whether a capability is attached.
    pub fn contains<C: Capability + ?Sized>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<C>())
    }

    /// Names of all attached capabilities, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.values().map(|e| e.name).collect();
        names.sort_unstable();
        names
    }

    /// Plugin that provided the capability named `name`.
    pub fn provider_of(&self, name: &str) -> Option<&str> {
        self.entries
            .values()
            .find(|e| e.name == name)
            .map(|e| e.provider.as_str())
    }

    /// Number of attached capabilities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no capabilities are attached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.values().map(|e| (e.name, e.provider.as_str())))
            .finish()
    }
}

/// Installs plugins and keeps their capabilities.
#[derive(Debug, Clone, Default)]
pub struct PluginHost {
    installed: Vec<String>,
    capabilities: Capabilities,
}

impl PluginHost {
    /// Create a host with nothing installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and install `plugin`.
    ///
    /// Installation is staged: if the plugin's `install` fails, none of the
    /// capabilities it attached so far are kept.
    pub fn install(&mut self, plugin: &dyn Plugin) -> Result<()> {
        validate_plugin(plugin)?;
        let name = plugin.name();

        let mut staged = self.capabilities.clone();
        staged.provider = name.to_string();
        plugin.install(&mut staged)?;
        staged.provider.clear();

        self.capabilities = staged;
        self.installed.push(name.to_string());
        debug!(plugin = %name, capabilities = ?self.capabilities.names(), "plugin installed");
        Ok(())
    }

    /// Names of installed plugins, in installation order.
    pub fn installed(&self) -> &[String] {
        &self.installed
    }

    /// Capabilities attached so far.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}
