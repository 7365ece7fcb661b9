//! Year-by-year growth schedule
//!
//! Combines the compound-growth and inflation views into one row per
//! elapsed year, from year 0 (the principal) through the investment
//! horizon.

use crate::growth::compute_maturity_value;
use crate::inflation::adjust_for_inflation;
use serde::Serialize;

/// One year of the growth schedule
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleRow {
    /// Years elapsed since the investment was made (0 = today)
    pub year: i32,
    /// Compounded value at the end of this year
    pub nominal_value: f64,
    /// Nominal value restated in today's purchasing power
    pub adjusted_value: f64,
}

/// Build the year-by-year schedule for an investment.
///
/// Row 0 holds the untouched principal; the final row matches the values
/// the one-shot calculation reports for the full horizon. Inherits the
/// preconditions of the two underlying calculations.
pub fn growth_schedule(
    principal: u64,
    annual_rate_percent: f64,
    inflation_rate_percent: f64,
    years: i32,
) -> Vec<ScheduleRow> {
    assert!(years >= 0, "years must be non-negative, got {}", years);

    (0..=years)
        .map(|year| {
            let nominal_value = compute_maturity_value(principal, annual_rate_percent, year);
            ScheduleRow {
                year,
                nominal_value,
                adjusted_value: adjust_for_inflation(nominal_value, inflation_rate_percent, year),
            }
        })
        .collect()
}
