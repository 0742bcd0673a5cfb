use std::{collections::HashSet, hash::Hash, str::FromStr};

use bigdecimal::{BigDecimal, RoundingMode, Signed};


/// Split values into the set of unique values and the set of values seen more than once
pub(crate) fn vec_to_hashsets<T, I>(values: I) -> (HashSet<T>, HashSet<T>)
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut unique = HashSet::new();
    let mut duplicates = HashSet::new();
    for value in values {
        if !unique.insert(value.clone()) {
            duplicates.insert(value);
        }
    }
    (unique, duplicates)
}

/// Largest exponent, in either direction, of a parsed decimal
///
/// Adding decimals aligns their scales, so a literal like `1e-400000000` would make every sum
/// hundreds of megabytes long.
const MAX_DECIMAL_SCALE: i64 = 64;

/// Check that a decimal's exponent is small enough to do arithmetic with
pub fn within_scale_bounds(number: &BigDecimal) -> bool {
    number.as_bigint_and_exponent().1.abs() <= MAX_DECIMAL_SCALE
}

/// Parse a complete decimal literal, rejecting out of range exponents
pub fn parse_decimal(text: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(text)
        .ok()
        .filter(within_scale_bounds)
}

/// Round half away from zero and always print `decimals` fractional digits
fn format_fixed(number: &BigDecimal, decimals: usize) -> String {
    let rounded = number
        .with_scale_round(decimals as i64, RoundingMode::HalfUp)
        .to_string();
    let (integer, fraction) = rounded.split_once('.').unwrap_or((&rounded, ""));
    format!("{integer}.{fraction:0<decimals$}")
}

/// Format an amount with exactly two decimal places and no grouping
pub fn format_amount(number: &BigDecimal) -> String {
    format_fixed(number, 2)
}

/// Format a percentage with exactly one decimal place
pub fn format_percentage(number: &BigDecimal) -> String {
    format_fixed(number, 1)
}

/// Nicely format a bigdecimal value with two decimal places and commas
pub fn format_bigdecimal(number: &BigDecimal) -> String {
    let negative = number.is_negative();
    let s = format_amount(&number.abs());
    let (integer, fractional) = s.split_once('.').unwrap_or((&s, "00"));

    let mut formatted = String::new();

    // Insert commas every three digits
    for (count, c) in integer.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            formatted.insert(0, ',');
        }
        formatted.insert(0, c);
    }

    if negative && (integer, fractional) != ("0", "00") {
        formatted.insert(0, '-');
    }

    formatted.push('.');
    formatted.push_str(fractional);
    formatted
}

/// Parse the longest decimal literal at the start of `text`
///
/// Leading whitespace is skipped. The literal is an optional sign, digits with an optional
/// fraction, and an optional exponent. Anything after it is ignored, so `"12.50 USD"` parses as
/// `12.50`. Returns `None` when no digit is found or the exponent is out of range.
pub fn parse_leading_decimal(text: &str) -> Option<BigDecimal> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let integer_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let integer_digits = end - integer_start;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        let mut cursor = end + 1;
        while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
            cursor += 1;
        }
        fraction_digits = cursor - end - 1;
        if fraction_digits > 0 {
            end = cursor;
        }
    }
    if integer_digits + fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exponent_start = cursor;
        while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
            cursor += 1;
        }
        if cursor > exponent_start {
            end = cursor;
        }
    }

    let (sign, digits) = text[..end].split_at(integer_start);
    let sign = if sign == "-" { "-" } else { "" };
    let literal = if integer_digits == 0 {
        format!("{sign}0{digits}")
    } else {
        format!("{sign}{digits}")
    };
    parse_decimal(&literal)
}
