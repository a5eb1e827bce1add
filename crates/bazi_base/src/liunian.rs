//! Annual pillars (流年) for forecast years.
//!
//! A forecast year is evaluated as of March, which always lies after that
//! year's 立春, so the pillar is the solar-year pillar of the same number.
//! No solar-term lookup is involved.

use crate::cycle::{check_era, year_pillar};
use crate::error::BaseError;
use crate::pillar::Pillar;

/// Civil month at which forecast years are evaluated.
pub const REFERENCE_MONTH: u32 = 3;

/// Upper bound on forecast years per request, the span of the longest
/// luck cycle sequence.
pub const MAX_FORECAST_YEARS: u32 = 1200;

/// Pillar of a forecast year, evaluated in [`REFERENCE_MONTH`].
pub fn annual_pillar(year: i32) -> Pillar {
    year_pillar(year)
}

/// The `count` consecutive years starting at `start_year`.
///
/// Only `start_year` is checked against the era; later years extend past it
/// freely since the pillar needs no table.
pub fn annual_years(
    start_year: i32,
    count: u32,
) -> Result<std::ops::RangeInclusive<i32>, BaseError> {
    if count == 0 {
        return Err(BaseError::InvalidInput("forecast year count must be positive"));
    }
    if count > MAX_FORECAST_YEARS {
        return Err(BaseError::InvalidInput("forecast year count exceeds 1200"));
    }
    check_era(start_year)?;
    Ok(start_year..=start_year + (count - 1) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn march_convention_matches_solar_year() {
        assert_eq!(annual_pillar(2024).to_string(), "甲辰");
        assert_eq!(annual_pillar(2025).to_string(), "乙巳");
        assert_eq!(annual_pillar(2026).to_string(), "丙午");
    }

    #[test]
    fn range_has_count_years() {
        let years: Vec<i32> = annual_years(2024, 12).unwrap().collect();
        assert_eq!(years.len(), 12);
        assert_eq!(years.first(), Some(&2024));
        assert_eq!(years.last(), Some(&2035));
    }

    #[test]
    fn may_run_past_era_end() {
        let years = annual_years(2100, 5).unwrap();
        assert_eq!(years.end(), &2104);
    }

    #[test]
    fn horizon_is_capped() {
        let years = annual_years(1900, MAX_FORECAST_YEARS).unwrap();
        assert_eq!(years.count(), MAX_FORECAST_YEARS as usize);
        assert!(matches!(
            annual_years(1900, MAX_FORECAST_YEARS + 1),
            Err(BaseError::InvalidInput(_))
        ));
        assert!(matches!(
            annual_years(1900, 2_000_000_000),
            Err(BaseError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects() {
        assert!(matches!(annual_years(2024, 0), Err(BaseError::InvalidInput(_))));
        assert!(matches!(
            annual_years(1899, 3),
            Err(BaseError::UnsupportedEra { .. })
        ));
        assert!(matches!(
            annual_years(2000, u32::MAX),
            Err(BaseError::InvalidInput(_))
        ));
    }
}
