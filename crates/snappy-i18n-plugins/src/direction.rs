//! Text direction plugin.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use snappy_i18n::{Capabilities, Capability, I18n, Plugin, Result};

/// Languages written right to left.
pub const RTL_LANGUAGES: [&str; 8] = ["ar", "he", "fa", "ur", "ps", "sd", "ug", "yi"];

/// Writing direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rtl => "rtl",
            Self::Ltr => "ltr",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides the writing direction of a locale.
pub trait TextDirection: Send + Sync {
    fn is_rtl(&self, locale: &str) -> bool;

    fn direction(&self, locale: &str) -> Direction {
        if self.is_rtl(locale) {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }
}

impl Capability for dyn TextDirection {
    const NAME: &'static str = "direction";
}

/// Prefix match against [`RTL_LANGUAGES`], so `ar-EG` is right to left.
#[derive(Debug, Clone, Copy, Default)]
pub struct RtlLanguages;

impl TextDirection for RtlLanguages {
    fn is_rtl(&self, locale: &str) -> bool {
        RTL_LANGUAGES.iter().any(|lang| locale.starts_with(lang))
    }
}

/// Attaches [`TextDirection`]; installed under the name `rtl`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionPlugin;

impl Plugin for DirectionPlugin {
    fn name(&self) -> &str {
        "rtl"
    }

    fn install(&self, capabilities: &mut Capabilities) -> Result<()> {
        capabilities.insert::<dyn TextDirection>(Arc::new(RtlLanguages));
        Ok(())
    }
}

/// Direction queries on the facade.
///
/// `None` asks about the current locale. Each method fails with
/// `CapabilityMissing` when [`DirectionPlugin`] is not installed.
pub trait DirectionExt {
    /// Whether `locale` is written right to left.
    fn is_rtl(&self, locale: Option<&str>) -> Result<bool>;
    /// Whether `locale` is written left to right.
    fn is_ltr(&self, locale: Option<&str>) -> Result<bool>;
    /// Writing direction of `locale`.
    fn direction(&self, locale: Option<&str>) -> Result<Direction>;
}

impl DirectionExt for I18n {
    fn is_rtl(&self, locale: Option<&str>) -> Result<bool> {
        let direction = self.capability::<dyn TextDirection>()?;
        Ok(direction.is_rtl(locale.unwrap_or(self.locale())))
    }

    fn is_ltr(&self, locale: Option<&str>) -> Result<bool> {
        DirectionExt::is_rtl(self, locale).map(|rtl| !rtl)
    }

    fn direction(&self, locale: Option<&str>) -> Result<Direction> {
        let direction = self.capability::<dyn TextDirection>()?;
        Ok(direction.direction(locale.unwrap_or(self.locale())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use snappy_i18n::{I18nConfig, I18nError};
    use test_case::test_case;

    #[test_case("ar", true)]
    #[test_case("he", true)]
    #[test_case("fa", true)]
    #[test_case("yi", true)]
    #[test_case("ar-EG", true ; "region tag")]
    #[test_case("en", false)]
    #[test_case("es", false)]
    #[test_case("", false ; "empty")]
    fn test_rtl_languages(locale: &str, rtl: bool) {
        assert_eq!(RtlLanguages.is_rtl(locale), rtl);
        let expected = if rtl { Direction::Rtl } else { Direction::Ltr };
        assert_eq!(RtlLanguages.direction(locale), expected);
    }

    #[test]
    fn test_facade_defaults_to_current_locale() {
        let mut i18n = I18n::new(I18nConfig::new(["en", "ar"], "en"))
            .unwrap()
            .with_plugin(DirectionPlugin)
            .unwrap();

        assert!(!i18n.is_rtl(None).unwrap());
        i18n.set_locale("ar").unwrap();
        assert!(i18n.is_rtl(None).unwrap());
        assert_eq!(i18n.direction(None).unwrap().to_string(), "rtl");
        assert!(i18n.is_ltr(Some("en")).unwrap());
    }

    #[test]
    fn test_requires_plugin() {
        let i18n = I18n::new(I18nConfig::new(["en"], "en")).unwrap();
        assert_matches!(i18n.is_ltr(None), Err(I18nError::CapabilityMissing("direction")));
    }
}
