//! Formatting plugins for snappy-i18n.
//!
//! - **Direction** (`rtl`): right-to-left detection ([`DirectionExt`])
//! - **Date** (`date`): date and time formatting ([`DateExt`])
//! - **Number** (`number`): number, currency, and percent formatting ([`NumberExt`])
//!
//! Each plugin attaches a capability to the facade; the matching extension
//! trait exposes it as methods on [`I18n`]:
//!
//! ```
//! use snappy_i18n::I18nConfig;
//! use snappy_i18n_plugins::{create_i18n, DirectionExt, NumberExt, NumberOptions};
//!
//! let i18n = create_i18n(I18nConfig::new(["en", "ar"], "en"))?;
//! assert!(i18n.is_rtl(Some("ar"))?);
//! assert_eq!(i18n.format_number(1234.56, &NumberOptions::new())?, "1,234.56");
//! # Ok::<(), snappy_i18n::I18nError>(())
//! ```

pub mod date;
pub mod direction;
pub mod number;

pub use date::{DateExt, DateFormatter, DateOptions, DatePlugin, LocaleDates, MonthStyle};
pub use direction::{Direction, DirectionExt, DirectionPlugin, RtlLanguages, TextDirection};
pub use number::{LocaleNumbers, NumberExt, NumberFormatter, NumberOptions, NumberPlugin, Separators};

use snappy_i18n::{I18n, I18nConfig, Result};
use tracing::debug;

/// Build a facade with the direction, date, and number plugins installed,
/// in that order, after any plugins named in `config`.
pub fn create_i18n(config: I18nConfig) -> Result<I18n> {
    let mut i18n = I18n::new(config)?;

    i18n.add_plugin(&DirectionPlugin)?;
    i18n.add_plugin(&DatePlugin)?;
    i18n.add_plugin(&NumberPlugin)?;

    debug!(plugins = ?i18n.plugins(), "default plugins installed");
    Ok(i18n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plugins() {
        let i18n = create_i18n(I18nConfig::new(["en"], "en")).unwrap();
        assert_eq!(i18n.plugins(), ["rtl", "date", "number"]);
        assert_eq!(i18n.capabilities().names(), vec!["date", "direction", "number"]);
        assert_eq!(i18n.capabilities().provider_of("direction"), Some("rtl"));
    }

    #[test]
    fn test_config_plugins_install_first() {
        let config = I18nConfig::new(["en"], "en").with_plugin(NumberPlugin);
        let i18n = create_i18n(config).unwrap();
        assert_eq!(i18n.plugins(), ["number", "rtl", "date", "number"]);
        assert_eq!(i18n.capabilities().len(), 3);
    }
}
