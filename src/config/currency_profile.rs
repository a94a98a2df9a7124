use serde::Deserialize;

use crate::extractors::extract_price::{get_price_with, US_THOUSANDS_SEPARATOR};
use crate::extractors::price_pattern::PricePattern;
use crate::formatters::format_descriptor::FormatDescriptor;

fn default_thousands_separator() -> char {
    US_THOUSANDS_SEPARATOR
}

/// Extraction and rendering rules for one currency.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyProfile {
    pub pattern: PricePattern,
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: char,
    pub format: FormatDescriptor,
}

impl CurrencyProfile {
    pub fn new(pattern: PricePattern, thousands_separator: char, format: FormatDescriptor) -> Self {
        Self {
            pattern,
            thousands_separator,
            format,
        }
    }

    pub fn us() -> Self {
        Self::new(
            PricePattern::us(),
            US_THOUSANDS_SEPARATOR,
            FormatDescriptor::us(),
        )
    }

    pub fn extract(&self, text: &str) -> Option<String> {
        get_price_with(text, &self.pattern, self.thousands_separator)
    }

    pub fn format(&self, value: impl ToString) -> String {
        self.format.format(value)
    }
}

impl Default for CurrencyProfile {
    fn default() -> Self {
        Self::us()
    }
}
