//! Civil calendar arithmetic for the bazi engine.
//!
//! This crate provides:
//! - Julian Date / Julian Day Number ↔ Gregorian conversions
//! - `CivilTime`, a naive wall-clock date/time with validation and parsing
//! - `Epoch`, seconds past J2000.0 on a single time scale
//! - ΔT (TT − UT) for turning dynamical-time solutions into clock time

pub mod civil_time;
pub mod delta_t;
pub mod error;
pub mod julian;

use serde::{Deserialize, Serialize};

pub use civil_time::CivilTime;
pub use delta_t::delta_t_seconds;
pub use error::{ErrorKind, TimeError};
pub use julian::{
    J2000_JD, J2000_JDN, SECONDS_PER_DAY, calendar_to_jd, date_from_jdn, day_of_year,
    days_in_month, is_leap_year, jd_to_calendar, julian_day_number,
};

/// An instant as seconds past J2000.0 (2000-01-01T12:00:00).
///
/// The scale (UT or a local civil zone) is implied by whoever holds it;
/// [`Epoch::shifted_hours`] moves between zones.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Epoch {
    seconds: f64,
}

impl Epoch {
    /// Create an epoch from seconds past J2000.0.
    pub fn from_seconds(s: f64) -> Self {
        Self { seconds: s }
    }

    /// Create an epoch from a Julian Date on the same scale.
    pub fn from_jd(jd: f64) -> Self {
        Self {
            seconds: (jd - J2000_JD) * SECONDS_PER_DAY,
        }
    }

    /// Seconds past J2000.0.
    pub fn as_seconds(self) -> f64 {
        self.seconds
    }

    /// Julian Date on the same scale.
    pub fn as_jd(self) -> f64 {
        J2000_JD + self.seconds / SECONDS_PER_DAY
    }

    /// The same instant read on a clock `hours` ahead.
    pub fn shifted_hours(self, hours: f64) -> Self {
        Self {
            seconds: self.seconds + hours * 3600.0,
        }
    }

    /// This epoch plus a (possibly fractional, possibly negative) number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self {
            seconds: self.seconds + days * SECONDS_PER_DAY,
        }
    }

    /// Signed days from `self` to `later`.
    pub fn days_until(self, later: Epoch) -> f64 {
        (later.seconds - self.seconds) / SECONDS_PER_DAY
    }

    /// Round to the nearest whole second.
    pub fn round_to_second(self) -> Self {
        Self {
            seconds: self.seconds.round(),
        }
    }

    /// Civil reading of this epoch (rounded to the millisecond).
    pub fn to_civil(self) -> CivilTime {
        CivilTime::from_epoch(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_from_jd_roundtrip() {
        let jd = 2_460_000.5;
        let epoch = Epoch::from_jd(jd);
        assert!((epoch.as_jd() - jd).abs() < 1e-9);
    }

    #[test]
    fn epoch_j2000_is_zero() {
        let epoch = Epoch::from_jd(J2000_JD);
        assert_eq!(epoch.as_seconds(), 0.0);
    }

    #[test]
    fn shift_between_zones() {
        let local = CivilTime::new(2000, 1, 1, 8, 0, 0.0).to_epoch();
        let ut = local.shifted_hours(-8.0);
        assert_eq!(ut.to_civil(), CivilTime::new(2000, 1, 1, 0, 0, 0.0));
    }

    #[test]
    fn day_arithmetic() {
        let a = CivilTime::date(2024, 2, 28).to_epoch();
        let b = a.add_days(2.0);
        assert_eq!(b.to_civil(), CivilTime::date(2024, 3, 1));
        assert!((a.days_until(b) - 2.0).abs() < 1e-12);
    }
}
