use log::{debug, trace};

use crate::extractors::price_pattern::{PriceMatcher, PricePattern};

pub const US_THOUSANDS_SEPARATOR: char = ',';

/// Returns the first US-style price in `text`, e.g. `"1323.00"` for `"$1,323.00"`.
pub fn get_price(text: &str) -> Option<String> {
    get_price_with(text, &PricePattern::us(), US_THOUSANDS_SEPARATOR)
}

/// Returns the amount of the first price `matcher` finds in `text`, as a
/// numeric-looking string.
///
/// Only the first occurrence of `thousands_separator` is removed. When the
/// separator is not `,` the first remaining `,` is then read as a decimal
/// comma and turned into `.`.
pub fn get_price_with<M>(text: &str, matcher: &M, thousands_separator: char) -> Option<String>
where
    M: PriceMatcher + ?Sized,
{
    let Some(found) = matcher.find_price(text) else {
        debug!("No price found in {:?}", text);
        return None;
    };

    let amount = if thousands_separator == ',' {
        found.amount.replacen(thousands_separator, "", 1)
    } else {
        found
            .amount
            .replacen(thousands_separator, "", 1)
            .replacen(',', ".", 1)
    };

    trace!("Price {:?} normalized to {:?}", found.token, amount);
    Some(amount)
}
