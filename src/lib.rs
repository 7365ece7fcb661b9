//! Investment Calculator - compound growth and inflation adjustment for lump sums
//!
//! This library provides:
//! - Future-value calculation under compound annual growth
//! - Discounting of a future amount to present-day purchasing power
//! - Year-by-year growth schedules combining both views

pub mod growth;
pub mod inflation;
pub mod schedule;

// Re-export commonly used items
pub use growth::compute_maturity_value;
pub use inflation::adjust_for_inflation;
pub use schedule::{growth_schedule, ScheduleRow};
