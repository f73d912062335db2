//! Ge'ez numeral encoding.
//!
//! The Ge'ez system has dedicated glyphs for the units 1-9 and the tens
//! 10-90, plus marker glyphs for the hundreds, thousands, and
//! ten-thousands places. A number is emitted most-significant tier
//! first; a tier whose value is zero produces no glyph at all.

use crate::consts::{
    ARABIC_ZERO, GEEZ_HUNDRED, GEEZ_TEN_THOUSAND, GEEZ_TENS, GEEZ_THOUSAND, GEEZ_UNITS,
};

/// Renders an integer as a Ge'ez numeral string.
///
/// Zero has no Ge'ez glyph and falls back to the Arabic `"0"`; negative
/// numbers are rendered with a leading `-`.
pub fn to_ethiopic_numeral(value: i64) -> String {
    if value == 0 {
        return ARABIC_ZERO.to_owned();
    }
    if value < 0 {
        return format!("-{}", encode(value.unsigned_abs()));
    }
    encode(value.unsigned_abs())
}

/// Pure alias of [`to_ethiopic_numeral`].
pub fn to_geez_numeral(value: i64) -> String {
    to_ethiopic_numeral(value)
}

fn encode(value: u64) -> String {
    let mut result = String::new();
    let mut remaining = value;

    if remaining >= 10_000 {
        result.push_str(unit_glyph(remaining / 10_000));
        result.push_str(GEEZ_TEN_THOUSAND);
        remaining %= 10_000;
    }

    if remaining >= 1_000 {
        result.push_str(unit_glyph(remaining / 1_000));
        result.push_str(GEEZ_THOUSAND);
        remaining %= 1_000;
    }

    if remaining >= 100 {
        result.push_str(unit_glyph(remaining / 100));
        result.push_str(GEEZ_HUNDRED);
        remaining %= 100;
    }

    if remaining >= 10 {
        result.push_str(GEEZ_TENS[(remaining / 10 - 1) as usize]);
        remaining %= 10;
    }

    if remaining > 0 {
        result.push_str(unit_glyph(remaining));
    }

    result
}

// A multiplier above 9 (possible in the ten-thousands tier for very
// large inputs) has no single-glyph form and is dropped.
fn unit_glyph(digit: u64) -> &'static str {
    match digit {
        1..=9 => GEEZ_UNITS[(digit - 1) as usize],
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(to_ethiopic_numeral(1), "፩");
        assert_eq!(to_ethiopic_numeral(5), "፭");
        assert_eq!(to_ethiopic_numeral(9), "፱");
    }

    #[test]
    fn test_tens() {
        assert_eq!(to_ethiopic_numeral(10), "፲");
        assert_eq!(to_ethiopic_numeral(20), "፳");
        assert_eq!(to_ethiopic_numeral(25), "፳፭");
        assert_eq!(to_ethiopic_numeral(99), "፺፱");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(to_ethiopic_numeral(100), "፩፻");
        assert_eq!(to_ethiopic_numeral(200), "፪፻");
        assert_eq!(to_ethiopic_numeral(250), "፪፻፶");
        assert_eq!(to_ethiopic_numeral(999), "፱፻፺፱");
    }

    #[test]
    fn test_thousands_and_above() {
        assert_eq!(to_ethiopic_numeral(1000), "፩ሺ");
        assert_eq!(to_ethiopic_numeral(2015), "፪ሺ፲፭");
        assert_eq!(to_ethiopic_numeral(2016), "፪ሺ፲፮");
        assert_eq!(to_ethiopic_numeral(10000), "፩፼");
    }

    #[test]
    fn test_zero_tiers_are_skipped() {
        // No glyph for the empty tens place
        assert_eq!(to_ethiopic_numeral(105), "፩፻፭");
        // No glyph for the empty hundreds and units places
        assert_eq!(to_ethiopic_numeral(3050), "፫ሺ፶");
    }

    #[test]
    fn test_zero() {
        assert_eq!(to_ethiopic_numeral(0), "0");
    }

    #[test]
    fn test_negative() {
        assert_eq!(to_ethiopic_numeral(-5), "-፭");
        assert_eq!(to_ethiopic_numeral(-2015), "-፪ሺ፲፭");
    }

    #[test]
    fn test_minimum_value_does_not_overflow() {
        // i64::MIN has no positive counterpart; unsigned_abs keeps the
        // magnitude intact.
        let rendered = to_ethiopic_numeral(i64::MIN);
        assert!(rendered.starts_with('-'));
    }

    #[test]
    fn test_geez_alias() {
        for value in [-5, 0, 5, 25, 100, 999, 2015, 10000] {
            assert_eq!(
                to_geez_numeral(value),
                to_ethiopic_numeral(value),
                "alias should agree for {value}"
            );
        }
    }
}
