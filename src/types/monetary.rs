use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Number of decimal places used for every exported price, margin and delta.
pub const CENTS: u32 = 2;

const STRIPPED_CHARACTERS: [char; 5] = ['$', ',', '"', '\'', ' '];

/// Coerces a raw cell into a non-negative decimal.
///
/// Surrounding whitespace is trimmed, then currency symbols, thousands separators, quotes
/// and spaces are removed before parsing. Anything left that is not a plain or scientific
/// decimal (tabs, non-breaking spaces, digit separators like `_`) makes the value
/// non-numeric. Empty, non-numeric or negative input becomes zero; this function never fails.
pub fn normalize(raw: &str) -> Decimal {
    let cleaned: String = raw.trim()
        .chars()
        .filter(|c| !STRIPPED_CHARACTERS.contains(c))
        .collect();

    if cleaned.is_empty() || !cleaned.chars().all(is_numeric_character) {
        return Decimal::ZERO;
    }

    let parsed = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned));

    match parsed {
        Ok(value) if value.is_sign_negative() => Decimal::ZERO,
        Ok(value) => value.normalize(),
        Err(_) => Decimal::ZERO
    }
}

fn is_numeric_character(character: char) -> bool {
    character.is_ascii_digit() || matches!(character, '.' | '-' | '+' | 'e' | 'E')
}

/// Rounds half away from zero to the given number of decimal places.
pub fn round_to(value: Decimal, decimal_places: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);

    //NOTE: Rounding a tiny negative value can leave a "-0" behind which would leak into the output files
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }

    rounded
}

pub fn round_cents(value: Decimal) -> Decimal {
    round_to(value, CENTS)
}

/// Renders a value with exactly `decimal_places` digits after the point, e.g. `84.00`.
pub fn format_fixed(value: Decimal, decimal_places: u32) -> String {
    let mut rounded = round_to(value, decimal_places);
    rounded.rescale(decimal_places);
    rounded.to_string()
}

pub fn format_cents(value: Decimal) -> String {
    format_fixed(value, CENTS)
}
