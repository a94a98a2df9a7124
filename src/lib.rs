//! Price extraction from scraped text and localized currency rendering.
//!
//! ```
//! use price_scraping::{format_currency, get_price, render_with_format};
//!
//! assert_eq!(get_price("Price: $1,323.00 today").as_deref(), Some("1323.00"));
//! assert_eq!(format_currency(-1234.5), "-$1,234.50");
//! assert_eq!(render_with_format('.', ',', 2, "EUR 1.000,00", "1234.5"), "EUR 1.234,50");
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod formatters;
pub mod utilities;

pub use crate::config::currency_profile::CurrencyProfile;
pub use crate::config::settings::Settings;
pub use error::{Error, Result};
pub use extractors::extract_price::{get_price, get_price_with, US_THOUSANDS_SEPARATOR};
pub use extractors::extract_price_from_html::extract_price_from_html;
pub use extractors::price_pattern::{PriceMatch, PriceMatcher, PricePattern, US_PRICE_PATTERN};
pub use formatters::format_currency::{format_currency, render_with_format};
pub use formatters::format_descriptor::FormatDescriptor;
pub use formatters::insert_commas::{insert_commas, insert_thousands_separator};
pub use utilities::collect_text::{collect_text, get_stripped_text, NodeKind, TextNode};
pub use utilities::set_text::{set_text, SetText};
pub use utilities::strip_whitespace::strip_whitespace;
