//! Annual pillars (流年) for a run of forecast years.

use std::fmt::{Display, Formatter};

use bazi_base::{ERA_LAST_YEAR, Pillar, Zodiac, annual_pillar, annual_years};
use bazi_jieqi::jie_table;
use bazi_time::CivilTime;

use crate::config::ChartConfig;
use crate::error::ChartError;

/// Pillar of one forecast year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiuNianEntry {
    pub year: i32,
    pub pillar: Pillar,
    pub zodiac: Zodiac,
    /// Local civil instant of the 立春 opening this pillar, when the year
    /// lies within the boundary table.
    pub lichun: Option<CivilTime>,
}

impl Display for LiuNianEntry {
    /// `2024 甲辰 (Dragon)`
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.year, self.pillar, self.zodiac)
    }
}

/// Annual pillars for `count` consecutive years from `start_year`, with 立春
/// read on the default clock.
pub fn compute_annual_pillars(start_year: i32, count: u32) -> Result<Vec<LiuNianEntry>, ChartError> {
    compute_annual_pillars_with(start_year, count, &ChartConfig::default())
}

/// Annual pillars for `count` consecutive years from `start_year`.
///
/// Each year is evaluated in March, so its pillar is the solar-year pillar of
/// the same number. Only `start_year` has to lie in the supported era; years
/// past the boundary table get no 立春 instant.
pub fn compute_annual_pillars_with(
    start_year: i32,
    count: u32,
    config: &ChartConfig,
) -> Result<Vec<LiuNianEntry>, ChartError> {
    config.validate()?;
    let years = annual_years(start_year, count)?;
    let table = jie_table()?;
    years
        .map(|year| -> Result<LiuNianEntry, ChartError> {
            let pillar = annual_pillar(year);
            let lichun = if year <= ERA_LAST_YEAR + 1 {
                Some(
                    table
                        .lichun(year)?
                        .shifted_hours(config.utc_offset_hours)
                        .to_civil(),
                )
            } else {
                None
            };
            Ok(LiuNianEntry {
                year,
                pillar,
                zodiac: pillar.branch().zodiac(),
                lichun,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_base::MAX_FORECAST_YEARS;

    #[test]
    fn twelve_years_from_2024() {
        let entries = compute_annual_pillars(2024, 12).unwrap();
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0].pillar.to_string(), "甲辰");
        assert_eq!(entries[0].zodiac, Zodiac::Dragon);
        assert_eq!(entries[1].pillar.to_string(), "乙巳");
        for w in entries.windows(2) {
            assert_eq!(w[1].year, w[0].year + 1);
            assert_eq!(w[1].pillar, w[0].pillar.next());
        }
        let lichun = entries[0].lichun.unwrap();
        assert_eq!((lichun.month, lichun.day, lichun.hour), (2, 4, 16));
    }

    #[test]
    fn horizon_past_the_table() {
        let entries = compute_annual_pillars(2095, 10).unwrap();
        assert_eq!(entries.last().unwrap().year, 2104);
        assert!(entries.iter().find(|e| e.year == 2101).unwrap().lichun.is_some());
        assert!(entries.iter().find(|e| e.year == 2102).unwrap().lichun.is_none());
    }

    #[test]
    fn horizon_is_capped() {
        let entries = compute_annual_pillars(1900, MAX_FORECAST_YEARS).unwrap();
        assert_eq!(entries.len(), MAX_FORECAST_YEARS as usize);
        assert_eq!(entries.last().unwrap().year, 3099);
        let e = compute_annual_pillars(1900, MAX_FORECAST_YEARS + 1).unwrap_err();
        assert_eq!(e.kind(), bazi_time::ErrorKind::InvalidInput);
        assert!(compute_annual_pillars(1900, 2_000_000_000).is_err());
    }

    #[test]
    fn rejects_zero_and_out_of_era() {
        assert!(compute_annual_pillars(2024, 0).is_err());
        let e = compute_annual_pillars(1850, 5).unwrap_err();
        assert_eq!(e.kind(), bazi_time::ErrorKind::UnsupportedEra);
    }
}
