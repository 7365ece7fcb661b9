//! Compound growth of a lump-sum investment

/// Calculate the maturity value of an investment compounded annually.
///
/// # Arguments
/// * `principal` - Initial invested amount in whole currency units
/// * `annual_rate_percent` - Expected annual return rate as a percentage (5.5 means 5.5%)
/// * `years` - Investment horizon in whole years
///
/// # Returns
/// * `f64` - The future value `principal * (1 + rate/100)^years`
///
/// # Panics
/// Panics if `annual_rate_percent` or `years` is negative. Both are
/// caller programming errors, not recoverable runtime states.
///
/// Extreme rate/year combinations are not bounded; the result may
/// overflow to `f64::INFINITY`, which callers must handle themselves.
pub fn compute_maturity_value(principal: u64, annual_rate_percent: f64, years: i32) -> f64 {
    assert!(
        annual_rate_percent >= 0.0,
        "rate must be non-negative, got {}",
        annual_rate_percent
    );
    assert!(years >= 0, "years must be non-negative, got {}", years);

    principal as f64 * (1.0 + annual_rate_percent / 100.0).powi(years)
}
