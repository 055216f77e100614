//! Default plugins installed through `create_i18n`.

use chrono::NaiveDate;
use snappy_i18n::{params, I18nConfig, I18nError, Plugin};
use snappy_i18n_plugins::*;
use snappy_test_harness::fixtures::{english_structure, sample_config};
use snappy_test_harness::{assert_matches, assert_translates, init};

fn i18n() -> snappy_i18n::I18n {
    init();
    let mut i18n = create_i18n(sample_config()).unwrap();
    i18n.add_translations("en", &english_structure()).unwrap();
    i18n
}

#[test]
fn detects_rtl_languages() {
    let i18n = i18n();
    assert!(!i18n.is_rtl(Some("en")).unwrap());
    assert!(i18n.is_rtl(Some("ar")).unwrap());
    assert!(!i18n.is_ltr(Some("he")).unwrap());
    assert_eq!(i18n.direction(Some("fa")).unwrap(), Direction::Rtl);
}

#[test]
fn formats_dates() {
    let i18n = i18n();
    let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();

    assert_eq!(i18n.format_date(date, &DateOptions::new()).unwrap(), "1/1/2023");
    assert_eq!(
        i18n.format_date(
            date,
            &DateOptions::new().with_locale("en-US").with_month(MonthStyle::Long)
        )
        .unwrap(),
        "January 1, 2023"
    );
}

#[test]
fn formats_dates_in_current_locale() {
    let mut i18n = i18n();
    let value = NaiveDate::from_ymd_opt(2023, 7, 14)
        .unwrap()
        .and_hms_opt(18, 0, 5)
        .unwrap();

    i18n.set_locale("fr").unwrap();
    assert_eq!(i18n.format_date_time(value, &DateOptions::new()).unwrap(), "14/7/2023, 18:00:05");
    assert_eq!(i18n.format_time(value.time(), &DateOptions::new()).unwrap(), "18:00:05");
}

#[test]
fn formats_numbers() {
    let i18n = i18n();
    assert_eq!(i18n.format_number(1234.56, &NumberOptions::new()).unwrap(), "1,234.56");
    assert_eq!(
        i18n.format_number(1234.56, &NumberOptions::new().with_locale("de-DE"))
            .unwrap(),
        "1.234,56"
    );
    assert_eq!(
        i18n.format_currency(1234.56, "USD", &NumberOptions::new()).unwrap(),
        "$1,234.56"
    );
    assert_eq!(i18n.format_percent(0.42, &NumberOptions::new()).unwrap(), "42%");
}

#[test]
fn plugins_leave_translation_untouched() {
    let i18n = i18n();
    assert_translates!(i18n, "common.hello", params! { name = "John" }, "Hello, John!");
    assert_translates!(i18n, "common.items", params! { count = 1 }, "1 item");
}

#[test]
fn capabilities_require_their_plugin() {
    init();
    let i18n = snappy_i18n::I18n::new(I18nConfig::new(["en"], "en"))
        .unwrap()
        .with_plugin(DirectionPlugin)
        .unwrap();

    assert!(i18n.is_rtl(None).is_ok());
    assert_matches!(
        i18n.format_number(1.0, &NumberOptions::new()),
        Err(I18nError::CapabilityMissing("number"))
    );
    assert_matches!(
        i18n.format_date(NaiveDate::MIN, &DateOptions::new()),
        Err(I18nError::CapabilityMissing("date"))
    );
}

#[test]
fn later_plugin_overrides_capability() {
    struct Mirror;

    impl TextDirection for Mirror {
        fn is_rtl(&self, _locale: &str) -> bool {
            true
        }
    }

    struct MirrorPlugin;

    impl Plugin for MirrorPlugin {
        fn name(&self) -> &str {
            "mirror"
        }

        fn install(&self, capabilities: &mut snappy_i18n::Capabilities) -> snappy_i18n::Result<()> {
            capabilities.insert::<dyn TextDirection>(std::sync::Arc::new(Mirror));
            Ok(())
        }
    }

    let mut i18n = i18n();
    i18n.add_plugin(&MirrorPlugin).unwrap();

    assert!(i18n.is_rtl(Some("en")).unwrap());
    assert_eq!(i18n.capabilities().provider_of("direction"), Some("mirror"));
    assert_eq!(i18n.plugins().last().map(String::as_str), Some("mirror"));
}
