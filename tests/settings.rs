use std::io::Write;

use price_scraping::{FormatDescriptor, Settings};

fn sample_settings() -> Settings {
    Settings::load(concat!(env!("CARGO_MANIFEST_DIR"), "/Settings.toml")).unwrap()
}

#[test]
fn sample_profiles() {
    let settings = sample_settings();
    assert_eq!(settings.currencies.len(), 4);
    assert_eq!(settings.default_currency.as_deref(), Some("USD"));

    let eur = settings.profile("EUR").unwrap();
    assert_eq!(eur.format(-1234.5), "-1.234,50 €");
    assert_eq!(eur.extract("Prix : 1.234,50 €").as_deref(), Some("1234.50"));

    let jpy = settings.profile("jpy").unwrap();
    assert_eq!(jpy.format(1234567.8), "¥1,234,568");
    assert_eq!(jpy.extract("¥1,234,568").as_deref(), Some("1234,568"));
}

#[test]
fn resolve_falls_back_to_default_currency() {
    let settings = sample_settings();
    assert_eq!(settings.resolve(None, Some("CHF")), FormatDescriptor::us());
    assert_eq!(settings.resolve(None, Some("GBP")).format(5), "£5.00");
}

#[test]
fn load_from_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
default_currency = "SEK"

[currencies.SEK]
pattern = '([0-9][0-9 ]*,[0-9]{{2}})\s*kr'
thousands_separator = " "

[currencies.SEK.format]
thousands_separator = " "
decimal_separator = ","
num_decimals = 2
template = "1 000,00 kr"
"#
    )
    .unwrap();

    let settings = Settings::load(file.path()).unwrap();
    let sek = settings.default_profile().unwrap();
    assert_eq!(sek.format(98765.4), "98 765,40 kr");
    assert_eq!(sek.extract("Summa 1 250,00 kr").as_deref(), Some("1250.00"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = Settings::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(error.to_string().contains("Failed to read settings file"));
}

#[test]
fn invalid_file_is_an_error() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[currencies.USD]
pattern = '\$([0-9,]*)(\.[0-9]{{2}})'

[currencies.USD.format]
thousands_separator = ","
decimal_separator = "."
num_decimals = 2
template = "$1,000.00"
"#
    )
    .unwrap();

    assert!(Settings::load(file.path()).is_err());
}
