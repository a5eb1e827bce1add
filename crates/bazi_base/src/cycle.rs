//! Year and day positions in the 60-cycle.
//!
//! Both counts run continuously from fixed anchors:
//! - year: 1984 = 甲子 (index 0), counted in solar years that begin at 立春
//! - day: 1900-02-20 (JDN 2 415 071) = 甲子, counted in civil days

use bazi_time::julian_day_number;

use crate::error::BaseError;
use crate::pillar::Pillar;

/// Solar year whose pillar is 甲子.
pub const YEAR_ANCHOR: i32 = 1984;

/// Julian Day Number of a 甲子 day (1900-02-20).
pub const DAY_ANCHOR_JDN: i64 = 2_415_071;

/// First solar year covered by the solar-term table.
pub const ERA_FIRST_YEAR: i32 = 1900;

/// Last solar year covered by the solar-term table.
pub const ERA_LAST_YEAR: i32 = 2100;

/// Fail with `UnsupportedEra` unless `year` lies in `ERA_FIRST_YEAR..=ERA_LAST_YEAR`.
pub fn check_era(year: i32) -> Result<(), BaseError> {
    if (ERA_FIRST_YEAR..=ERA_LAST_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(BaseError::UnsupportedEra {
            year,
            first: ERA_FIRST_YEAR,
            last: ERA_LAST_YEAR,
        })
    }
}

/// Cycle index (0..=59) of a solar year.
pub fn year_cycle_index(solar_year: i32) -> u8 {
    (solar_year as i64 - YEAR_ANCHOR as i64).rem_euclid(60) as u8
}

/// Pillar of a solar year (the year that begins at that year's 立春).
pub fn year_pillar(solar_year: i32) -> Pillar {
    Pillar::nth(year_cycle_index(solar_year) as i64)
}

/// Cycle index (0..=59) of the civil day with Julian Day Number `jdn`.
pub fn day_cycle_index(jdn: i64) -> u8 {
    (jdn - DAY_ANCHOR_JDN).rem_euclid(60) as u8
}

/// Pillar of the civil day with Julian Day Number `jdn`.
pub fn day_pillar(jdn: i64) -> Pillar {
    Pillar::nth(day_cycle_index(jdn) as i64)
}

/// Pillar of a Gregorian date.
pub fn day_pillar_of_date(year: i32, month: u32, day: u32) -> Pillar {
    day_pillar(julian_day_number(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_year_is_jiazi() {
        assert_eq!(year_pillar(1984).to_string(), "甲子");
        assert_eq!(year_pillar(2044).to_string(), "甲子");
    }

    #[test]
    fn known_years() {
        assert_eq!(year_pillar(1999).to_string(), "己卯");
        assert_eq!(year_pillar(2024).to_string(), "甲辰");
        assert_eq!(year_pillar(1949).to_string(), "己丑");
        assert_eq!(year_pillar(1900).to_string(), "庚子");
        assert_eq!(year_pillar(1983).to_string(), "癸亥");
    }

    #[test]
    fn known_days() {
        assert_eq!(day_pillar_of_date(1900, 2, 20).to_string(), "甲子");
        assert_eq!(day_pillar_of_date(1900, 1, 1).to_string(), "甲戌");
        assert_eq!(day_pillar_of_date(2000, 1, 1).to_string(), "戊午");
        assert_eq!(day_pillar_of_date(1949, 10, 1).to_string(), "甲子");
    }

    #[test]
    fn day_index_steps_by_one() {
        let start = julian_day_number(1899, 12, 1);
        for jdn in start..start + 800 {
            assert_eq!(day_cycle_index(jdn + 1), (day_cycle_index(jdn) + 1) % 60);
        }
    }

    #[test]
    fn era_bounds() {
        assert!(check_era(1900).is_ok());
        assert!(check_era(2100).is_ok());
        assert!(matches!(
            check_era(1899),
            Err(BaseError::UnsupportedEra { year: 1899, .. })
        ));
        assert!(check_era(2101).is_err());
    }
}
