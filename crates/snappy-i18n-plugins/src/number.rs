//! Locale-aware number, currency, and percent formatting.
//!
//! Output follows each language's grouping and decimal separators:
//!
//! | language | 1234.5 |
//! |----------|--------|
//! | en | `1,234.5` |
//! | de, es, it, pt, nl | `1.234,5` |
//! | fr | `1 234,5` (narrow no-break space) |
//! | ru, uk | `1 234,5` (no-break space) |
//!
//! Other languages use the English separators.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use snappy_i18n::{language_of, Capabilities, Capability, I18n, Plugin, Result};

const NBSP: char = '\u{00A0}';
const NNBSP: char = '\u{202F}';

/// Upper bound on fraction digits.
pub const MAX_FRACTION_DIGITS: usize = 100;

/// Formatting options. Unset fields take the style's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberOptions {
    /// Locale to format for instead of the facade's current locale.
    pub locale: Option<String>,
    pub minimum_fraction_digits: Option<usize>,
    pub maximum_fraction_digits: Option<usize>,
}

impl NumberOptions {
    /// Options with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Format for `locale` instead of the current locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Pad the fraction with zeros to at least `digits` places.
    pub fn with_minimum_fraction_digits(mut self, digits: usize) -> Self {
        self.minimum_fraction_digits = Some(digits);
        self
    }

    /// Round to at most `digits` places.
    pub fn with_maximum_fraction_digits(mut self, digits: usize) -> Self {
        self.maximum_fraction_digits = Some(digits);
        self
    }

    /// Effective `(min, max)` fraction digits given the style defaults.
    ///
    /// An explicit maximum lowers the default minimum, and the maximum is
    /// never below the minimum. Both are capped at [`MAX_FRACTION_DIGITS`].
    fn fraction_digits(&self, default_min: usize, default_max: usize) -> (usize, usize) {
        let min = match (self.minimum_fraction_digits, self.maximum_fraction_digits) {
            (Some(min), _) => min,
            (None, Some(max)) => default_min.min(max),
            (None, None) => default_min,
        }
        .min(MAX_FRACTION_DIGITS);
        let max = self
            .maximum_fraction_digits
            .unwrap_or(default_max)
            .clamp(min, MAX_FRACTION_DIGITS);
        (min, max)
    }
}

/// Grouping and decimal separators of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    pub group: char,
    pub decimal: char,
}

impl Separators {
    /// Separators for a locale tag; only the language part is consulted.
    pub fn for_locale(locale: &str) -> Self {
        let (group, decimal) = match language_of(locale).as_str() {
            "de" | "es" | "it" | "pt" | "nl" => ('.', ','),
            "fr" => (NNBSP, ','),
            "ru" | "uk" => (NBSP, ','),
            _ => (',', '.'),
        };
        Self { group, decimal }
    }

    /// Whether symbols and units follow the number.
    fn trailing_units(&self) -> bool {
        self.decimal == ','
    }
}

/// Symbol for an ISO 4217 currency code, if one is known.
pub fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency.to_ascii_uppercase().as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

fn currency_digits(currency: &str) -> usize {
    if currency.eq_ignore_ascii_case("JPY") {
        0
    } else {
        2
    }
}

/// Format `n` with the given separators and fraction digits.
///
/// Rounds to `max` digits, then drops trailing zeros down to `min`.
pub fn format_decimal(n: f64, separators: Separators, min: usize, max: usize) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let rounded = format!("{:.*}", max, n.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (rounded.as_str(), ""),
    };

    let mut frac = frac_part.to_string();
    while frac.len() > min && frac.ends_with('0') {
        frac.pop();
    }

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac.bytes().all(|b| b == b'0');
    if n.is_sign_negative() && !is_zero {
        out.push('-');
    }

    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(separators.group);
        }
        out.push(digit);
    }

    if !frac.is_empty() {
        out.push(separators.decimal);
        out.push_str(&frac);
    }
    out
}

/// Formats numbers for a locale.
pub trait NumberFormatter: Send + Sync {
    fn format_number(&self, locale: &str, n: f64, options: &NumberOptions) -> String;
    fn format_currency(&self, locale: &str, n: f64, currency: &str, options: &NumberOptions) -> String;
    fn format_percent(&self, locale: &str, n: f64, options: &NumberOptions) -> String;
}

impl Capability for dyn NumberFormatter {
    const NAME: &'static str = "number";
}

/// Table-driven [`NumberFormatter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleNumbers;

impl NumberFormatter for LocaleNumbers {
    fn format_number(&self, locale: &str, n: f64, options: &NumberOptions) -> String {
        let (min, max) = options.fraction_digits(0, 3);
        format_decimal(n, Separators::for_locale(locale), min, max)
    }

    fn format_currency(&self, locale: &str, n: f64, currency: &str, options: &NumberOptions) -> String {
        let digits = currency_digits(currency);
        let (min, max) = options.fraction_digits(digits, digits);
        let separators = Separators::for_locale(locale);
        let amount = format_decimal(n, separators, min, max);

        let code = currency.to_ascii_uppercase();
        let symbol = currency_symbol(currency);
        let unit = symbol.unwrap_or(&code);

        if separators.trailing_units() {
            format!("{amount}{NBSP}{unit}")
        } else {
            let (sign, digits) = match amount.strip_prefix('-') {
                Some(digits) => ("-", digits),
                None => ("", amount.as_str()),
            };
            match symbol {
                Some(symbol) => format!("{sign}{symbol}{digits}"),
                None => format!("{sign}{code}{NBSP}{digits}"),
            }
        }
    }

    fn format_percent(&self, locale: &str, n: f64, options: &NumberOptions) -> String {
        let (min, max) = options.fraction_digits(0, 0);
        let separators = Separators::for_locale(locale);
        let value = format_decimal(n * 100.0, separators, min, max);

        match separators.group {
            NNBSP => format!("{value}{NNBSP}%"),
            _ if separators.trailing_units() => format!("{value}{NBSP}%"),
            _ => format!("{value}%"),
        }
    }
}

/// Attaches [`NumberFormatter`]; installed under the name `number`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberPlugin;

impl Plugin for NumberPlugin {
    fn name(&self) -> &str {
        "number"
    }

    fn install(&self, capabilities: &mut Capabilities) -> Result<()> {
        capabilities.insert::<dyn NumberFormatter>(Arc::new(LocaleNumbers));
        Ok(())
    }
}

/// Number formatting on the facade, in the current locale unless
/// `options.locale` overrides it.
///
/// Each method fails with `CapabilityMissing` when [`NumberPlugin`] is not
/// installed.
pub trait NumberExt {
    /// Plain decimal with up to three fraction digits by default.
    fn format_number(&self, n: f64, options: &NumberOptions) -> Result<String>;
    /// Amount in the ISO 4217 `currency`, e.g. `$1,234.56`.
    fn format_currency(&self, n: f64, currency: &str, options: &NumberOptions) -> Result<String>;
    /// `n` as a percentage, so `0.42` becomes `42%`.
    fn format_percent(&self, n: f64, options: &NumberOptions) -> Result<String>;
}

impl NumberExt for I18n {
    fn format_number(&self, n: f64, options: &NumberOptions) -> Result<String> {
        let formatter = self.capability::<dyn NumberFormatter>()?;
        let locale = options.locale.as_deref().unwrap_or(self.locale());
        Ok(formatter.format_number(locale, n, options))
    }

    fn format_currency(&self, n: f64, currency: &str, options: &NumberOptions) -> Result<String> {
        let formatter = self.capability::<dyn NumberFormatter>()?;
        let locale = options.locale.as_deref().unwrap_or(self.locale());
        Ok(formatter.format_currency(locale, n, currency, options))
    }

    fn format_percent(&self, n: f64, options: &NumberOptions) -> Result<String> {
        let formatter = self.capability::<dyn NumberFormatter>()?;
        let locale = options.locale.as_deref().unwrap_or(self.locale());
        Ok(formatter.format_percent(locale, n, options))
    }
}
