//! Starting age of the first luck cycle.
//!
//! The elapsed time between birth and the nearest jie in the direction of
//! travel is scaled by the traditional rule 3 days = 1 year, so
//! 1 day = 4 months, 1 hour = 5 days and 1 minute = 2 hours.

use crate::dayun::types::{DAYS_PER_START_YEAR, StartAge};

/// Fractional starting age in years for `elapsed_days` between birth and the boundary.
pub fn start_age_years(elapsed_days: f64) -> f64 {
    elapsed_days.abs() / DAYS_PER_START_YEAR
}

/// Traditional breakdown of `elapsed_days`.
///
/// Whole days map to years (per 3) and months (per leftover day), leftover
/// hours to 5 days each and leftover minutes to 2 hours each. Hours that
/// reach a full day roll over into the day count.
pub fn start_age_breakdown(elapsed_days: f64) -> StartAge {
    let total_minutes = (elapsed_days.abs() * 1440.0).round() as u64;
    let whole_days = total_minutes / 1440;
    let rem_minutes = total_minutes % 1440;
    let hours = rem_minutes / 60;
    let minutes = rem_minutes % 60;

    let years = whole_days / 3;
    let months = (whole_days % 3) * 4;
    let mut days = hours * 5;
    let mut clock_hours = minutes * 2;
    days += clock_hours / 24;
    clock_hours %= 24;

    StartAge {
        years: years as u32,
        months: months as u32,
        days: days as u32,
        hours: clock_hours as u32,
    }
}
