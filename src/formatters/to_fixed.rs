use once_cell::sync::Lazy;
use regex::Regex;

/// Most fraction digits `to_fixed` renders; larger requests are clamped.
pub const MAX_DECIMALS: usize = 100;

static FLOAT_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\s\x{feff}]*([+-]?(?:(?i:inf(?:inity)?)|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?))",
    )
    .expect("Invalid float prefix regex")
});

/// Parses the longest numeric prefix of `value`, ignoring leading whitespace
/// and anything after the number. Returns NaN when there is no numeric prefix.
///
/// Both `Infinity` and the `inf` that Rust prints for an infinite `f64` are
/// read as infinity.
pub fn parse_float(value: &str) -> f64 {
    FLOAT_PREFIX_REGEX
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|number| number.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Renders `value` with exactly `num_decimals` fraction digits, rounding half
/// away from zero on the exact binary value.
///
/// NaN and infinities come out as `NaN`, `Infinity` and `-Infinity`. A
/// strictly negative value keeps its `-` even when it rounds to zero.
/// `num_decimals` is clamped to [`MAX_DECIMALS`].
pub fn to_fixed(value: f64, num_decimals: usize) -> String {
    let num_decimals = num_decimals.min(MAX_DECIMALS);
    if value.is_nan() {
        return "NaN".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{}Infinity", sign);
    }

    // exact expansion up to the rounding digit and beyond
    let precision = fraction_bits(value).max(num_decimals + 1);
    let exact = format!("{:.*}", precision, value.abs());
    let (int_digits, frac_digits) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_digits
        .bytes()
        .chain(frac_digits.bytes().take(num_decimals))
        .collect();
    let mut int_len = int_digits.len();

    let round_half_up = frac_digits
        .as_bytes()
        .get(num_decimals)
        .is_some_and(|digit| *digit >= b'5');
    if round_half_up && increment(&mut digits) {
        int_len += 1;
    }

    let mut fixed = String::with_capacity(sign.len() + digits.len() + 1);
    fixed.push_str(sign);
    fixed.extend(digits[..int_len].iter().map(|&d| d as char));
    if num_decimals > 0 {
        fixed.push('.');
        fixed.extend(digits[int_len..].iter().map(|&d| d as char));
    }
    fixed
}

/// Number of binary fraction digits of a finite `value`, which is also the
/// number of decimal fraction digits of its exact expansion.
fn fraction_bits(value: f64) -> usize {
    let bits = value.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);

    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };
    if mantissa == 0 {
        return 0;
    }

    let exponent = exponent + i64::from(mantissa.trailing_zeros());
    if exponent >= 0 {
        0
    } else {
        exponent.unsigned_abs() as usize
    }
}

/// Adds one to a run of ASCII digits. Returns true when the run grew by a
/// leading digit.
fn increment(digits: &mut Vec<u8>) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    digits.insert(0, b'1');
    true
}
