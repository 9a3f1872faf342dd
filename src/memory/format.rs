//! `%g`-style float formatting
//!
//! Floats are shown and concatenated the way C's `printf("%.10g", x)` prints
//! them: the shorter of fixed and scientific notation for the requested number
//! of significant digits, with trailing zeros removed.

/// Format `value` like C's `%.<precision>g`
pub fn format_g(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to the requested significant digits first; the exponent after
    // rounding decides the notation.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format_g(1.5, 10), "1.5");
        assert_eq!(format_g(100.0, 10), "100");
        assert_eq!(format_g(-0.25, 10), "-0.25");
        assert_eq!(format_g(0.0001, 10), "0.0001");
        assert_eq!(format_g(1234567890.0, 10), "1234567890");
    }

    #[test]
    fn test_rounds_to_significant_digits() {
        assert_eq!(format_g(0.1 + 0.2, 10), "0.3");
        assert_eq!(format_g(1.0 / 3.0, 10), "0.3333333333");
        assert_eq!(format_g(2.0 / 3.0, 10), "0.6666666667");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format_g(12345678901.0, 10), "1.23456789e+10");
        assert_eq!(format_g(0.00001, 10), "1e-05");
        assert_eq!(format_g(-2.5e-7, 10), "-2.5e-07");
        assert_eq!(format_g(1e100, 10), "1e+100");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_g(f64::INFINITY, 10), "inf");
        assert_eq!(format_g(f64::NEG_INFINITY, 10), "-inf");
        assert_eq!(format_g(0.0, 10), "0");
        assert_eq!(format_g(-0.0, 10), "-0");
        assert!(format_g(f64::NAN, 10).ends_with("nan"));
    }
}
