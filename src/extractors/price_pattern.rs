use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};

/// `$` followed by optional whitespace and an amount such as `1,323.00`.
///
/// The amount keeps its thousands separators: they are only stripped after
/// the pattern has matched.
pub const US_PRICE_PATTERN: &str = r"\$[\s\x{a0}]*([0-9,]*\.[0-9]{2})";

static US_PRICE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(US_PRICE_PATTERN).expect("Invalid US price regex"));

/// A price found in a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceMatch<'t> {
    /// The whole currency token, symbol included.
    pub token: &'t str,
    /// The numeric part, still carrying its thousands separators.
    pub amount: &'t str,
}

/// Anything able to locate the first price in a string.
pub trait PriceMatcher {
    fn find_price<'t>(&self, text: &'t str) -> Option<PriceMatch<'t>>;
}

/// A regular expression with exactly one capture group holding the amount.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct PricePattern {
    regex: Regex,
}

impl PricePattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        // captures_len counts the implicit whole-match group
        let found = regex.captures_len() - 1;
        if found != 1 {
            return Err(Error::CaptureGroupCount {
                pattern: pattern.to_string(),
                found,
            });
        }

        Ok(Self { regex })
    }

    pub fn us() -> Self {
        Self {
            regex: US_PRICE_REGEX.clone(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Default for PricePattern {
    fn default() -> Self {
        Self::us()
    }
}

impl PriceMatcher for PricePattern {
    fn find_price<'t>(&self, text: &'t str) -> Option<PriceMatch<'t>> {
        self.regex.captures(text).and_then(|caps| {
            let token = caps.get(0)?.as_str();
            let amount = caps.get(1)?.as_str();
            Some(PriceMatch { token, amount })
        })
    }
}

impl FromStr for PricePattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for PricePattern {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl fmt::Display for PricePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
