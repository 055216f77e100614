//! Token substitution.
//!
//! A single regex pass replaces every `prefix NAME suffix` token with the
//! rendered value of parameter `NAME`. Substituted values are never
//! rescanned, and tokens without a value are left untouched.
//!
//! Only missing and `null` parameters count as "without a value": `0`,
//! `false` and `""` are substituted like any other value.

use regex::{Captures, Regex};

use crate::config::InterpolationConfig;
use crate::error::{I18nError, Result};
use crate::params::Params;

/// Compiled token matcher for one pair of delimiters.
#[derive(Debug, Clone)]
pub struct Interpolator {
    prefix: String,
    suffix: String,
    pattern: Regex,
}

impl Interpolator {
    /// Compile a matcher for `prefix`/`suffix`.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        let suffix = suffix.into();

        if prefix.is_empty() || suffix.is_empty() {
            return Err(I18nError::config(
                "interpolation prefix and suffix must not be empty",
            ));
        }

        let pattern = Regex::new(&format!(
            "{}(.+?){}",
            regex::escape(&prefix),
            regex::escape(&suffix)
        ))
        .map_err(|e| I18nError::config(format!("invalid interpolation delimiters: {e}")))?;

        Ok(Self {
            prefix,
            suffix,
            pattern,
        })
    }

    /// Compile a matcher from configuration.
    pub fn from_config(config: &InterpolationConfig) -> Result<Self> {
        Self::new(config.prefix.as_str(), config.suffix.as_str())
    }

    /// Token prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Token suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Substitute `params` into `text`.
    ///
    /// Without parameters the text is returned unchanged.
    pub fn interpolate(&self, text: &str, params: Option<&Params>) -> String {
        let Some(params) = params else {
            return text.to_string();
        };

        self.pattern
            .replace_all(text, |caps: &Captures<'_>| {
                let name = &caps[1];
                params
                    .render(name)
                    .unwrap_or_else(|| format!("{}{}{}", self.prefix, name, self.suffix))
            })
            .into_owned()
    }
}
