//! Locale-aware date and time formatting on `chrono` values.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use snappy_i18n::{language_of, Capabilities, Capability, I18n, Plugin, Result};

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const ES_MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

const FR_MONTHS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin",
    "juillet", "août", "septembre", "octobre", "novembre", "décembre",
];

const DE_MONTHS: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni",
    "Juli", "August", "September", "Oktober", "November", "Dezember",
];

/// How the month is rendered in dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthStyle {
    /// `1/1/2023`
    #[default]
    Numeric,
    /// `January 1, 2023`
    Long,
}

/// Formatting options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateOptions {
    /// Locale to format for instead of the facade's current locale.
    pub locale: Option<String>,
    pub month: MonthStyle,
}

impl DateOptions {
    /// Numeric dates in the current locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Format for `locale` instead of the current locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Render the month as `month`.
    pub fn with_month(mut self, month: MonthStyle) -> Self {
        self.month = month;
        self
    }
}

/// Formats dates and times for a locale.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, locale: &str, date: NaiveDate, options: &DateOptions) -> String;

    fn format_time(&self, locale: &str, time: NaiveTime) -> String;

    fn format_date_time(&self, locale: &str, value: NaiveDateTime, options: &DateOptions) -> String {
        format!(
            "{}, {}",
            self.format_date(locale, value.date(), options),
            self.format_time(locale, value.time())
        )
    }
}

impl Capability for dyn DateFormatter {
    const NAME: &'static str = "date";
}

/// Pattern-table [`DateFormatter`].
///
/// | language | numeric | long |
/// |----------|---------|------|
/// | en | `1/31/2023` | `January 31, 2023` |
/// | de | `31.1.2023` | `31. Januar 2023` |
/// | ru | `31.1.2023` | `31 January 2023` |
/// | es | `31/1/2023` | `31 de enero de 2023` |
/// | fr | `31/1/2023` | `31 janvier 2023` |
/// | it, pt | `31/1/2023` | `31 January 2023` |
/// | others | `2023-01-31` | `31 January 2023` |
///
/// Times are `h:mm:ss AM/PM` in English and `HH:mm:ss` elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleDates;

impl DateFormatter for LocaleDates {
    fn format_date(&self, locale: &str, date: NaiveDate, options: &DateOptions) -> String {
        let language = language_of(locale);

        match options.month {
            MonthStyle::Numeric => {
                let pattern = match language.as_str() {
                    "en" => "%-m/%-d/%Y",
                    "de" | "ru" => "%-d.%-m.%Y",
                    "fr" | "es" | "it" | "pt" => "%-d/%-m/%Y",
                    _ => "%Y-%m-%d",
                };
                date.format(pattern).to_string()
            }
            MonthStyle::Long => {
                let (day, month, year) = (date.day(), date.month0() as usize, date.year());
                match language.as_str() {
                    "en" => format!("{} {day}, {year}", EN_MONTHS[month]),
                    "de" => format!("{day}. {} {year}", DE_MONTHS[month]),
                    "es" => format!("{day} de {} de {year}", ES_MONTHS[month]),
                    "fr" => format!("{day} {} {year}", FR_MONTHS[month]),
                    _ => format!("{day} {} {year}", EN_MONTHS[month]),
                }
            }
        }
    }

    fn format_time(&self, locale: &str, time: NaiveTime) -> String {
        let pattern = if language_of(locale) == "en" {
            "%-I:%M:%S %p"
        } else {
            "%H:%M:%S"
        };
        time.format(pattern).to_string()
    }
}

/// Attaches [`DateFormatter`]; installed under the name `date`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatePlugin;

impl Plugin for DatePlugin {
    fn name(&self) -> &str {
        "date"
    }

    fn install(&self, capabilities: &mut Capabilities) -> Result<()> {
        capabilities.insert::<dyn DateFormatter>(Arc::new(LocaleDates));
        Ok(())
    }
}

/// Date formatting on the facade, in the current locale unless
/// `options.locale` overrides it.
///
/// Each method fails with `CapabilityMissing` when [`DatePlugin`] is not
/// installed.
pub trait DateExt {
    /// Date only, numeric or with a long month name.
    fn format_date(&self, date: NaiveDate, options: &DateOptions) -> Result<String>;
    /// Time of day; `options.month` is ignored.
    fn format_time(&self, time: NaiveTime, options: &DateOptions) -> Result<String>;
    /// Date and time joined by `, `.
    fn format_date_time(&self, value: NaiveDateTime, options: &DateOptions) -> Result<String>;
}

impl DateExt for I18n {
    fn format_date(&self, date: NaiveDate, options: &DateOptions) -> Result<String> {
        let formatter = self.capability::<dyn DateFormatter>()?;
        let locale = options.locale.as_deref().unwrap_or(self.locale());
        Ok(formatter.format_date(locale, date, options))
    }

    fn format_time(&self, time: NaiveTime, options: &DateOptions) -> Result<String> {
        let formatter = self.capability::<dyn DateFormatter>()?;
        let locale = options.locale.as_deref().unwrap_or(self.locale());
        Ok(formatter.format_time(locale, time))
    }

    fn format_date_time(&self, value: NaiveDateTime, options: &DateOptions) -> Result<String> {
        let formatter = self.capability::<dyn DateFormatter>()?;
        let locale = options.locale.as_deref().unwrap_or(self.locale());
        Ok(formatter.format_date_time(locale, value, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case("en", "1/31/2023")]
    #[test_case("en-US", "1/31/2023" ; "region tag")]
    #[test_case("de", "31.1.2023")]
    #[test_case("ru", "31.1.2023")]
    #[test_case("fr", "31/1/2023")]
    #[test_case("pt_BR", "31/1/2023")]
    #[test_case("ja", "2023-01-31")]
    fn test_numeric_dates(locale: &str, expected: &str) {
        assert_eq!(LocaleDates.format_date(locale, date(2023, 1, 31), &DateOptions::new()), expected);
    }

    #[test_case("en", "March 5, 2024")]
    #[test_case("de", "5. März 2024")]
    #[test_case("es", "5 de marzo de 2024")]
    #[test_case("fr", "5 mars 2024")]
    #[test_case("ar", "5 March 2024")]
    fn test_long_dates(locale: &str, expected: &str) {
        let options = DateOptions::new().with_month(MonthStyle::Long);
        assert_eq!(LocaleDates.format_date(locale, date(2024, 3, 5), &options), expected);
    }

    #[test]
    fn test_times() {
        let time = NaiveTime::from_hms_opt(14, 5, 9).unwrap();
        assert_eq!(LocaleDates.format_time("en", time), "2:05:09 PM");
        assert_eq!(LocaleDates.format_time("de", time), "14:05:09");

        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert_eq!(LocaleDates.format_time("en", midnight), "12:00:00 AM");
    }

    #[test]
    fn test_date_time() {
        let value = date(2023, 1, 1).and_hms_opt(9, 30, 0).unwrap();
        assert_eq!(
            LocaleDates.format_date_time("en", value, &DateOptions::new()),
            "1/1/2023, 9:30:00 AM"
        );
        assert_eq!(
            LocaleDates.format_date_time("fr", value, &DateOptions::new()),
            "1/1/2023, 09:30:00"
        );
    }

    #[test]
    fn test_options_deserialize() {
        let options: DateOptions = serde_json::from_str(r#"{"locale": "en-US", "month": "long"}"#).unwrap();
        assert_eq!(options, DateOptions::new().with_locale("en-US").with_month(MonthStyle::Long));
    }
}
