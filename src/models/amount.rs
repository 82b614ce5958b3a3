//! Amount coercion and formatting
//!
//! Amounts are stored exactly as typed. Every place that needs a number goes
//! through [`coerce_amount`], which treats anything that is not a finite
//! decimal number as zero.

/// Parse a raw amount string, treating non-numeric content as `0.0`
///
/// Surrounding whitespace is ignored and an empty string is zero. Signs,
/// a leading or trailing decimal point, and exponents (`1e3`) are accepted.
pub fn coerce_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Format a number with two decimal places
pub fn format_amount(value: f64) -> String {
    // -0.00 reads badly next to a currency symbol
    if value == 0.0 {
        return "0.00".to_string();
    }
    format!("{:.2}", value)
}

/// Format a number with two decimal places behind a currency symbol
pub fn format_money(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, format_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_decimals() {
        assert_eq!(coerce_amount("3.50"), 3.5);
        assert_eq!(coerce_amount("12"), 12.0);
        assert_eq!(coerce_amount("-4.25"), -4.25);
        assert_eq!(coerce_amount("+2"), 2.0);
    }

    #[test]
    fn test_lenient_number_shapes() {
        assert_eq!(coerce_amount("  7.5  "), 7.5);
        assert_eq!(coerce_amount(".5"), 0.5);
        assert_eq!(coerce_amount("5."), 5.0);
        assert_eq!(coerce_amount("1e3"), 1000.0);
    }

    #[test]
    fn test_non_numeric_is_zero() {
        assert_eq!(coerce_amount(""), 0.0);
        assert_eq!(coerce_amount("   "), 0.0);
        assert_eq!(coerce_amount("abc"), 0.0);
        assert_eq!(coerce_amount("3.50abc"), 0.0);
        assert_eq!(coerce_amount("1,50"), 0.0);
        assert_eq!(coerce_amount("NaN"), 0.0);
        assert_eq!(coerce_amount("inf"), 0.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(3.5), "3.50");
        assert_eq!(format_amount(96.5), "96.50");
        assert_eq!(format_amount(-12.0), "-12.00");
        assert_eq!(format_amount(-0.0), "0.00");
        assert_eq!(format_money("€", 0.1 + 0.2), "€0.30");
    }
}
