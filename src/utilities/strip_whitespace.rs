use once_cell::sync::Lazy;
use regex::Regex;

static STRIP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\s\x{a0}\x{feff}]+|[\s\x{a0}\x{feff}]+$").expect("Invalid strip regex")
});

/// Removes leading and trailing whitespace, non-breaking spaces included.
/// Absent input gives an empty string.
pub fn strip_whitespace<'a>(s: impl Into<Option<&'a str>>) -> String {
    match s.into() {
        Some(s) if !s.is_empty() => STRIP_REGEX.replace_all(s, "").into_owned(),
        _ => String::new(),
    }
}
