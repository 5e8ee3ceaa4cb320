//! Display helpers for evaluation results.

/// Rounds half away from zero at `places` decimals.
///
/// Values too large to scale are returned as they are, and `-0` becomes `0`.
pub fn round_to_decimals(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor + 0.0
}

/// Formats a result as a plain decimal: no exponent, no trailing zeros.
pub fn format_result(value: f64) -> String {
    // f64's Display already prints the shortest exact decimal without exponent notation.
    format!("{}", value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(round_to_decimals(0.1 + 0.2, 10), 0.3);
        assert_eq!(round_to_decimals(2.5, 0), 3.0);
        assert_eq!(round_to_decimals(-2.5, 0), -3.0);
        assert_eq!(round_to_decimals(1.23456, 2), 1.23);
        assert_eq!(round_to_decimals(f64::MAX, 10), f64::MAX);
    }

    #[test]
    fn test_round_normalises_negative_zero() {
        let value = round_to_decimals(-1e-17, 10);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(14.0), "14");
        assert_eq!(format_result(0.3), "0.3");
        assert_eq!(format_result(-4.0), "-4");
        assert_eq!(format_result(0.5), "0.5");
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(1e21), "1000000000000000000000");
        assert_eq!(format_result(0.00001), "0.00001");
    }
}
