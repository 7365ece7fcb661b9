//! Inflation discounting of a future monetary amount

/// Discount a future amount back to today's purchasing power.
///
/// # Arguments
/// * `amount` - Future monetary amount (typically a maturity value)
/// * `inflation_rate_percent` - Annual inflation rate as a percentage; may be
///   negative to model deflation
/// * `years` - Number of whole years to discount over
///
/// # Returns
/// * `f64` - The present-value equivalent `amount / (1 + rate/100)^years`
///
/// # Panics
/// Panics if `years` is negative. The inflation rate itself is not
/// validated: a rate of exactly -100 makes the denominator zero and the
/// result follows IEEE-754 division semantics (infinity or NaN).
pub fn adjust_for_inflation(amount: f64, inflation_rate_percent: f64, years: i32) -> f64 {
    assert!(years >= 0, "years must be non-negative, got {}", years);

    amount / (1.0 + inflation_rate_percent / 100.0).powi(years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::compute_maturity_value;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_zero_years_no_change() {
        let got = adjust_for_inflation(2000.0, 3.2, 0);
        assert!((got - 2000.0).abs() < TOLERANCE, "got {}", got);
    }

    #[test]
    fn test_zero_inflation_no_change_over_time() {
        let got = adjust_for_inflation(5000.0, 0.0, 15);
        assert!((got - 5000.0).abs() < TOLERANCE, "got {}", got);
    }

    #[test]
    fn test_positive_inflation_discounts_value() {
        let want = 10000.0 / 1.025_f64.powi(5);
        let got = adjust_for_inflation(10000.0, 2.5, 5);
        assert!((got - want).abs() < TOLERANCE, "got {}, want {}", got, want);
    }

    #[test]
    fn test_negative_inflation_is_legal() {
        // Deflation inflates today's purchasing power
        let want = 10000.0 / 0.975_f64.powi(5);
        let got = adjust_for_inflation(10000.0, -2.5, 5);
        assert!((got - want).abs() < TOLERANCE, "got {}, want {}", got, want);
        assert!(got > 10000.0);
    }

    #[test]
    fn test_minus_100_percent_divides_by_zero() {
        // Unguarded by design: denominator is exactly zero
        let got = adjust_for_inflation(10000.0, -100.0, 5);
        assert!(got.is_infinite());
    }

    #[test]
    #[should_panic(expected = "years must be non-negative")]
    fn test_negative_years_panics() {
        adjust_for_inflation(5000.0, 2.0, -5);
    }

    #[test]
    fn test_inverse_of_maturity_value_when_rates_match() {
        let maturity = compute_maturity_value(2500, 4.0, 12);
        let got = adjust_for_inflation(maturity, 4.0, 12);
        assert!((got - 2500.0).abs() < TOLERANCE, "got {}", got);
    }
}
