//! Locale code validation.

/// Locale identifier (e.g., `"en"`, `"ar"`).
pub type Locale = String;

/// Check that `locale` is a two-letter alphabetic code.
///
/// Case-insensitive: `"en"`, `"EN"` and `"eN"` all pass.
pub fn is_valid_locale(locale: &str) -> bool {
    locale.len() == 2 && locale.chars().all(|c| c.is_ascii_alphabetic())
}

/// Check that every entry of `locales` is a valid locale code.
pub fn is_valid_locale_list<S: AsRef<str>>(locales: &[S]) -> bool {
    locales.iter().all(|l| is_valid_locale(l.as_ref()))
}

/// Extract the lowercased language part of a tag such as `"de-DE"` or `"pt_BR"`.
pub fn language_of(tag: &str) -> String {
    tag.split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}
