//! Formatting helpers for presenting probabilities.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// `0.405` -> `"40.5%"`. Rounds half away from zero at one decimal place.
///
/// Rounding works on the shortest decimal form of `fraction` (what the
/// service sent, e.g. `0.5005`), not on its binary approximation.
pub fn format_percent(fraction: f64) -> String {
    let exact = Decimal::from_str(&fraction.to_string())
        .ok()
        .and_then(|value| value.checked_mul(Decimal::ONE_HUNDRED));
    match exact {
        Some(percent) => {
            let mut percent =
                percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            percent.rescale(1);
            format!("{percent}%")
        }
        // NaN, infinities and magnitudes beyond `Decimal`.
        None => format!("{:.1}%", fraction * 100.0),
    }
}

/// Character count, not bytes.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Truncate `text` to at most `max` characters.
pub fn clamp_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(0.4), "40.0%");
        assert_eq!(format_percent(0.6), "60.0%");
        assert_eq!(format_percent(1.0), "100.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(format_percent(0.405), "40.5%");
        assert_eq!(format_percent(0.12345), "12.3%");
        assert_eq!(format_percent(0.0005), "0.1%");
    }

    #[test]
    fn four_decimal_midpoints_round_up() {
        assert_eq!(format_percent(0.5005), "50.1%");
        assert_eq!(format_percent(0.5015), "50.2%");
        assert_eq!(format_percent(0.5045), "50.5%");
        assert_eq!(format_percent(0.4995), "50.0%");
        for thousandths in 0..1000u32 {
            let fraction: f64 = format!("0.{thousandths:03}5").parse().unwrap();
            let expected = format!("{}.{}%", (thousandths + 1) / 10, (thousandths + 1) % 10);
            assert_eq!(format_percent(fraction), expected, "{fraction}");
        }
    }

    #[test]
    fn non_finite_values_still_format() {
        assert_eq!(format_percent(f64::NAN), "NaN%");
        assert_eq!(format_percent(f64::INFINITY), "inf%");
    }

    #[test]
    fn percent_is_stable_across_calls() {
        let first = format_percent(0.3333);
        assert_eq!(first, "33.3%");
        assert_eq!(format_percent(0.3333), first);
    }

    #[test]
    fn clamp_counts_characters() {
        assert_eq!(clamp_chars("héllo", 2), "hé");
        assert_eq!(clamp_chars("abc", 10), "abc");
        assert_eq!(clamp_chars("abc", 0), "");
        assert_eq!(char_count("héllo"), 5);
    }
}
