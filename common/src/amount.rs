use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places the web dashboard shows balances with.
pub const WEB_DISPLAY_PLACES: u32 = 2;

/// Decimal places the mobile screens show balances with.
pub const MOBILE_DISPLAY_PLACES: u32 = 4;

/// Parse user-entered amount text into a decimal.
///
/// Accepts plain (`"0.25"`, `"-1"`) and scientific (`"2.5e-3"`) notation,
/// ignoring surrounding whitespace. Returns `None` for anything else,
/// including `NaN`/`Infinity` spellings, values out of decimal range, and
/// text with more digits than a decimal holds (rather than rounding it).
/// The sign is preserved; callers decide what range is acceptable.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E');
    if !trimmed.chars().all(allowed) || !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    match trimmed.find(['e', 'E']) {
        Some(pos) => {
            // from_scientific rounds an over-long mantissa
            Decimal::from_str_exact(&trimmed[..pos]).ok()?;
            Decimal::from_scientific(trimmed).ok()
        }
        None => Decimal::from_str_exact(trimmed).ok(),
    }
}

/// Format an amount with exactly `places` digits after the point.
/// Midpoints round away from zero.
pub fn format_amount(amount: Decimal, places: u32) -> String {
    let rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", places as usize, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_decimal("0.25"), Some(dec!(0.25)));
        assert_eq!(parse_decimal("  15.2 "), Some(dec!(15.2)));
        assert_eq!(parse_decimal("-1"), Some(dec!(-1)));
        assert_eq!(parse_decimal("0"), Some(Decimal::ZERO));
    }

    #[test]
    fn parses_scientific_notation() {
        assert_eq!(parse_decimal("2.5e-3"), Some(dec!(0.0025)));
        assert_eq!(parse_decimal("1E2"), Some(dec!(100)));
    }

    #[test]
    fn rejects_non_numeric_text() {
        for text in ["", "   ", "abc", "12abc", "NaN", "Infinity", "-", ".", "1_000", "1,5", "e"] {
            assert_eq!(parse_decimal(text), None, "{text:?} should not parse");
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(parse_decimal("1e400"), None);
        assert_eq!(parse_decimal("99999999999999999999999999999999999"), None);
    }

    #[test]
    fn rejects_excess_precision() {
        for text in [
            "10.000000000000000000000000000001",
            "0.00000000000000000000000000006",
            "0.00000000000000000000000000001",
            "1.0000000000000000000000000000001e1",
        ] {
            assert_eq!(parse_decimal(text), None, "{text:?} should not parse");
        }
        assert_eq!(
            parse_decimal("0.0000000000000000000000000001"),
            Some(Decimal::new(1, 28))
        );
    }

    #[test]
    fn formats_with_fixed_places() {
        assert_eq!(format_amount(dec!(2.5), WEB_DISPLAY_PLACES), "2.50");
        assert_eq!(format_amount(dec!(0.75), MOBILE_DISPLAY_PLACES), "0.7500");
        assert_eq!(format_amount(dec!(18.45), 1), "18.5");
        assert_eq!(format_amount(dec!(-0.125), 2), "-0.13");
        assert_eq!(format_amount(dec!(7), 0), "7");
    }
}
