//! CLDR-style plural categories.
//!
//! Rules are selected by exact locale code. Unknown locales use the
//! two-category English rule.

use std::fmt;

use serde::{Deserialize, Serialize};

/// CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Tag appended to plural keys (`"one"`, `"few"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plural rule families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralRule {
    /// `one` for 1, `other` otherwise.
    English,
    /// Russian, Ukrainian, Belarusian mod-10/mod-100 rule.
    EastSlavic,
    /// Six-way Arabic rule.
    Arabic,
    /// No plural distinction.
    Invariant,
}

impl PluralRule {
    /// Rule for an exact locale code.
    pub fn for_locale(locale: &str) -> Self {
        match locale {
            "ru" | "uk" | "be" => Self::EastSlavic,
            "ar" => Self::Arabic,
            "ja" | "zh" | "ko" => Self::Invariant,
            _ => Self::English,
        }
    }

    /// Categorize `n` under this rule.
    pub fn categorize(&self, n: f64) -> PluralCategory {
        match self {
            Self::English => {
                if n == 1.0 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::EastSlavic => {
                let mod10 = n % 10.0;
                let mod100 = n % 100.0;
                if mod10 == 1.0 && mod100 != 11.0 {
                    PluralCategory::One
                } else if is_one_of(mod10, &[2.0, 3.0, 4.0])
                    && !is_one_of(mod100, &[12.0, 13.0, 14.0])
                {
                    PluralCategory::Few
                } else if mod10 == 0.0
                    || is_one_of(mod10, &[5.0, 6.0, 7.0, 8.0, 9.0])
                    || is_one_of(mod100, &[11.0, 12.0, 13.0, 14.0])
                {
                    PluralCategory::Many
                } else {
                    PluralCategory::Other
                }
            }
            Self::Arabic => {
                let mod100 = n % 100.0;
                if n == 0.0 {
                    PluralCategory::Zero
                } else if n == 1.0 {
                    PluralCategory::One
                } else if n == 2.0 {
                    PluralCategory::Two
                } else if (3.0..=10.0).contains(&mod100) {
                    PluralCategory::Few
                } else if (11.0..=99.0).contains(&mod100) {
                    PluralCategory::Many
                } else {
                    PluralCategory::Other
                }
            }
            Self::Invariant => PluralCategory::Other,
        }
    }
}

fn is_one_of(n: f64, set: &[f64]) -> bool {
    set.iter().any(|&v| v == n)
}

/// Plural category of `count` in `locale`.
pub fn category(locale: &str, count: f64) -> PluralCategory {
    PluralRule::for_locale(locale).categorize(count)
}

/// Append the plural category of `count` to `text` as `text_<category>`.
pub fn suffix(locale: &str, text: &str, count: f64) -> String {
    format!("{}_{}", text, category(locale, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("en", 1.0, PluralCategory::One)]
    #[test_case("en", 0.0, PluralCategory::Other)]
    #[test_case("en", 5.0, PluralCategory::Other)]
    #[test_case("fr", 1.0, PluralCategory::One)]
    #[test_case("es", 2.0, PluralCategory::Other)]
    #[test_case("xx", 1.0, PluralCategory::One ; "unknown locale one")]
    #[test_case("xx", 7.0, PluralCategory::Other ; "unknown locale other")]
    fn test_english_like(locale: &str, n: f64, expected: PluralCategory) {
        assert_eq!(category(locale, n), expected);
    }

    #[test_case(1.0, PluralCategory::One)]
    #[test_case(21.0, PluralCategory::One)]
    #[test_case(11.0, PluralCategory::Many)]
    #[test_case(2.0, PluralCategory::Few)]
    #[test_case(24.0, PluralCategory::Few)]
    #[test_case(12.0, PluralCategory::Many)]
    #[test_case(5.0, PluralCategory::Many)]
    #[test_case(0.0, PluralCategory::Many)]
    #[test_case(100.0, PluralCategory::Many)]
    #[test_case(1.5, PluralCategory::Other)]
    fn test_russian(n: f64, expected: PluralCategory) {
        assert_eq!(category("ru", n), expected);
        assert_eq!(category("uk", n), expected);
    }

    #[test_case(0.0, PluralCategory::Zero)]
    #[test_case(1.0, PluralCategory::One)]
    #[test_case(2.0, PluralCategory::Two)]
    #[test_case(3.0, PluralCategory::Few)]
    #[test_case(110.0, PluralCategory::Few)]
    #[test_case(11.0, PluralCategory::Many)]
    #[test_case(99.0, PluralCategory::Many)]
    #[test_case(100.0, PluralCategory::Other)]
    #[test_case(102.0, PluralCategory::Other)]
    fn test_arabic(n: f64, expected: PluralCategory) {
        assert_eq!(category("ar", n), expected);
    }

    #[test]
    fn test_invariant_locales() {
        for n in [0.0, 1.0, 2.0, 25.0] {
            assert_eq!(category("ja", n), PluralCategory::Other);
        }
    }

    #[test]
    fn test_rule_lookup_is_exact() {
        assert_eq!(PluralRule::for_locale("ru"), PluralRule::EastSlavic);
        assert_eq!(PluralRule::for_locale("RU"), PluralRule::English);
        assert_eq!(PluralRule::for_locale("ru-RU"), PluralRule::English);
    }

    #[test]
    fn test_suffix() {
        assert_eq!(suffix("en", "common.items", 1.0), "common.items_one");
        assert_eq!(suffix("en", "common.items", 3.0), "common.items_other");
        assert_eq!(suffix("ar", "apples", 0.0), "apples_zero");
    }
}
