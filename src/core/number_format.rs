//! Conversion between `f64` values and display strings.
//!
//! Finite values serialize to the shortest decimal string that parses back to
//! the same `f64`. Very large and very small magnitudes switch to exponent
//! notation (`1e+21`, `1.5e-7`), the thresholds calculator front-ends
//! conventionally use. Non-finite values serialize to `Infinity`,
//! `-Infinity` and `NaN`.

/// Literal shown when an operation has no meaningful result.
pub const ERROR_TOKEN: &str = "Error";

pub const INFINITY_TOKEN: &str = "Infinity";
pub const NEG_INFINITY_TOKEN: &str = "-Infinity";
pub const NAN_TOKEN: &str = "NaN";

const EXPONENT_UPPER: f64 = 1e21;
const EXPONENT_LOWER: f64 = 1e-6;

#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return NAN_TOKEN.to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            INFINITY_TOKEN.to_owned()
        } else {
            NEG_INFINITY_TOKEN.to_owned()
        };
    }
    // Covers -0.0 as well.
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return format!("{value}");
    }

    let raw = format!("{value:e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => raw,
    }
}

/// Parses a serialized number, including the non-finite tokens.
///
/// Returns `None` for the error marker and for anything that is not a number.
/// Typed entries beyond the `f64` range parse to the matching infinity.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    match text {
        ERROR_TOKEN => None,
        INFINITY_TOKEN => Some(f64::INFINITY),
        NEG_INFINITY_TOKEN => Some(f64::NEG_INFINITY),
        NAN_TOKEN => Some(f64::NAN),
        _ => {
            if text.is_empty() || !text.bytes().any(|b| b.is_ascii_digit()) {
                return None;
            }
            text.parse::<f64>().ok()
        }
    }
}

/// Whether `display` is a plain number-in-progress that digits may extend.
///
/// Exponent forms, non-finite tokens and the error marker are not editable;
/// the next digit starts a fresh entry instead.
#[must_use]
pub fn is_editable_entry(display: &str) -> bool {
    let body = display.strip_prefix('-').unwrap_or(display);
    !body.is_empty()
        && body.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && body.bytes().filter(|&b| b == b'.').count() <= 1
}

/// Number of digit characters in an entry, ignoring sign and decimal point.
///
/// The placeholder `0` in front of a `0.` entry is not counted.
#[must_use]
pub fn entry_digit_count(display: &str) -> usize {
    let body = display.strip_prefix('-').unwrap_or(display);
    let body = body.strip_prefix("0.").unwrap_or(body);
    body.bytes().filter(u8::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::{entry_digit_count, format_number, is_editable_entry, parse_number};

    #[test]
    fn format_number_uses_shortest_round_trip_form() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-12.25), "-12.25");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn format_number_normalizes_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn format_number_switches_to_exponent_outside_display_range() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn format_number_emits_non_finite_tokens() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn parse_number_accepts_entries_in_progress() {
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("0."), Some(0.0));
        assert_eq!(parse_number("-3.75"), Some(-3.75));
        assert_eq!(parse_number("1e+21"), Some(1e21));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert!(parse_number("NaN").is_some_and(f64::is_nan));
    }

    #[test]
    fn parse_number_rejects_error_marker_and_garbage() {
        assert_eq!(parse_number("Error"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn parse_number_keeps_overflowing_entries_infinite() {
        let huge = "9".repeat(309);
        assert_eq!(parse_number(&huge), Some(f64::INFINITY));
        assert_eq!(parse_number(&format!("-{huge}")), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn editable_entries_are_plain_decimals() {
        assert!(is_editable_entry("0"));
        assert!(is_editable_entry("-12.5"));
        assert!(is_editable_entry("3."));
        assert!(!is_editable_entry("1e-8"));
        assert!(!is_editable_entry("Infinity"));
        assert!(!is_editable_entry("Error"));
        assert!(!is_editable_entry("-"));
    }

    #[test]
    fn entry_digit_count_skips_sign_point_and_placeholder_zero() {
        assert_eq!(entry_digit_count("-12.50"), 4);
        assert_eq!(entry_digit_count("0."), 0);
        assert_eq!(entry_digit_count("-0.25"), 2);
        assert_eq!(entry_digit_count("10.5"), 3);
    }
}
