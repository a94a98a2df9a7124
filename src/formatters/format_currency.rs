use log::debug;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::formatters::format_descriptor::FormatDescriptor;
use crate::formatters::insert_commas::insert_thousands_separator;
use crate::formatters::to_fixed::{parse_float, to_fixed};

/// Locates the example amount inside a template such as `"$1,000.00"` or
/// `"EUR 1.000,00"`.
static TEMPLATE_AMOUNT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"1([^0-9])?0{3}(?:([^0-9])?(0+))?").expect("Invalid template amount regex")
});

pub(crate) fn template_has_amount(template: &str) -> bool {
    TEMPLATE_AMOUNT_REGEX.is_match(template)
}

/// Formats `value` as US dollars, e.g. `"$1,234.50"`.
pub fn format_currency(value: impl ToString) -> String {
    FormatDescriptor::us().format(value)
}

/// Renders `value` into `template`, replacing its `1,000`-style example
/// amount with the value grouped by `thousands_separator`, split by
/// `decimal_separator` and fixed to `num_decimals` places.
///
/// A negative sign is placed in front of the whole template. A value that
/// does not parse as a number renders as `NaN` inside the template.
pub fn render_with_format(
    thousands_separator: char,
    decimal_separator: char,
    num_decimals: usize,
    template: &str,
    value: &str,
) -> String {
    let fixed = to_fixed(parse_float(value), num_decimals);

    let (negative, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };

    let amount = match unsigned.split_once('.') {
        Some((integer, fraction)) => {
            let mut joined = insert_thousands_separator(integer, thousands_separator);
            joined.push(decimal_separator);
            joined.extend(fraction.chars().take(num_decimals));
            joined
        }
        None => insert_thousands_separator(unsigned, thousands_separator),
    };

    if !template_has_amount(template) {
        debug!("Template {:?} has no amount to replace", template);
    }
    let rendered = TEMPLATE_AMOUNT_REGEX.replacen(template, 1, NoExpand(&amount));

    format!("{}{}", negative, rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_defaults() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency("1234567.891"), "$1,234,567.89");
    }

    #[test]
    fn sign_precedes_template() {
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
        assert_eq!(render_with_format('.', ',', 2, "1.000,00 €", "-5"), "-5,00 €");
    }

    #[test]
    fn european_separators() {
        assert_eq!(
            render_with_format('.', ',', 2, "EUR 1.000,00", "1234.5"),
            "EUR 1.234,50"
        );
    }

    #[test]
    fn zero_decimals() {
        assert_eq!(render_with_format(',', '.', 0, "¥1,000", "1234567.8"), "¥1,234,568");
    }

    #[test]
    fn template_without_separator() {
        assert_eq!(render_with_format(' ', ',', 2, "1000,00 kr", "98765.4"), "98 765,40 kr");
    }

    #[test]
    fn only_first_amount_is_replaced() {
        assert_eq!(
            render_with_format(',', '.', 2, "$1,000.00 (was $1,000.00)", "5"),
            "$5.00 (was $1,000.00)"
        );
    }

    #[test]
    fn template_without_amount_is_kept() {
        assert_eq!(render_with_format(',', '.', 2, "USD", "5"), "USD");
    }

    #[test]
    fn unparseable_value_renders_placeholder() {
        assert_eq!(format_currency("abc"), "$NaN");
    }

    #[test]
    fn infinite_numbers_render_as_infinity() {
        assert_eq!(format_currency(f64::INFINITY), "$In,fin,ity");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-$In,fin,ity");
        assert_eq!(format_currency(f64::INFINITY), format_currency("Infinity"));
    }

    #[test]
    fn huge_decimal_counts_do_not_panic() {
        let rendered = render_with_format(',', '.', usize::MAX, "$1,000.00", "1");
        assert!(rendered.starts_with("$1.000"));
        assert_eq!(rendered.len(), "$1.".len() + 100);
    }

    #[test]
    fn dollar_signs_in_separator_are_literal() {
        assert_eq!(render_with_format(',', '$', 2, "1,000$00", "3.5"), "3$50");
    }
}
