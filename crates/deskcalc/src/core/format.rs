//! Number-to-display conversion

/// Formats a value for the calculator display
///
/// Integral values print without a fractional part and negative zero prints
/// as `"0"`. Everything else, including non-finite values, uses the default
/// `f64` display: `inf`, `-inf` and `NaN`.
#[must_use]
pub fn format_display_value(value: Option<f64>) -> Option<String> {
    let value = value?;
    if value.fract() == 0.0 {
        if value == 0.0 {
            return Some("0".to_string());
        }
        return Some(format!("{value:.0}"));
    }
    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64) -> String {
        format_display_value(Some(value)).unwrap()
    }

    #[test]
    fn test_none_is_none() {
        assert_eq!(format_display_value(None), None);
    }

    #[test]
    fn test_integral_drops_fraction() {
        assert_eq!(fmt(7.0), "7");
        assert_eq!(fmt(-42.0), "-42");
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt(0.0), "0");
    }

    #[test]
    fn test_fraction_uses_default_display() {
        assert_eq!(fmt(1.5), "1.5");
        assert_eq!(fmt(-0.25), "-0.25");
        assert_eq!(fmt(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_large_integral_keeps_all_digits() {
        assert_eq!(fmt(1e10), "10000000000");
        assert_eq!(fmt(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_small_fraction_is_not_exponential() {
        assert_eq!(fmt(0.0001), "0.0001");
    }

    // The non-finite contract
    #[test]
    fn test_positive_infinity() {
        assert_eq!(fmt(f64::INFINITY), "inf");
    }

    #[test]
    fn test_negative_infinity() {
        assert_eq!(fmt(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_nan() {
        assert_eq!(fmt(f64::NAN), "NaN");
    }
}
