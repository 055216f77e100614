//! Simple example demonstrating i18n usage.

use serde_json::json;
use snappy_common_log::{init, LogConfig};
use snappy_i18n::{params, t, I18n, I18nConfig, MergeStrategy};

fn main() -> anyhow::Result<()> {
    init(LogConfig::from_env())?;

    println!("=== snappy-i18n Example ===");

    let config = I18nConfig::new(["en", "es", "ru", "ar"], "en")
        .with_fallback_locale("en")
        .with_merge_strategy(MergeStrategy::Deep)
        .warn_on_missing(true);
    let mut i18n = I18n::new(config)?;

    i18n.add_translations(
        "en",
        &json!({
            "app": { "welcome": "Welcome to snappy!" },
            "user": { "greeting": "Hello, {{name}}!" },
            "files_one": "{{count}} file",
            "files_other": "{{count}} files"
        }),
    )?;
    i18n.add_translations(
        "es",
        &json!({
            "app": { "welcome": "¡Bienvenido a snappy!" },
            "user": { "greeting": "¡Hola, {{name}}!" }
        }),
    )?;
    i18n.add_translations(
        "ru",
        &json!({
            "files_one": "{{count}} файл",
            "files_few": "{{count}} файла",
            "files_many": "{{count}} файлов"
        }),
    )?;

    println!("Current locale: {}", i18n.locale());
    println!("Translation: '{}'", t!(i18n, "app.welcome")?);
    println!("With params: '{}'", t!(i18n, "user.greeting", name = "Ada")?);

    i18n.set_locale("es")?;
    println!("\nCurrent locale: {}", i18n.locale());
    println!("Translation: '{}'", t!(i18n, "app.welcome")?);
    println!("With params: '{}'", t!(i18n, "user.greeting", name = "María")?);

    // Missing in Arabic, resolved from the fallback locale.
    i18n.set_locale("ar")?;
    println!("\nCurrent locale: {}", i18n.locale());
    println!("Fallback: '{}'", t!(i18n, "app.welcome")?);
    println!("Missing key: '{}'", t!(i18n, "missing.key")?);

    println!("\n=== Plural Forms ===");
    i18n.set_locale("ru")?;
    for count in [1, 3, 5, 21] {
        println!("ru {count}: '{}'", i18n.t_with("files", &params! { count = count })?);
    }

    println!("\nMissing in ru: {:?}", i18n.translations().missing_keys("ru"));
    Ok(())
}
