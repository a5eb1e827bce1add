//! Naive civil date/time with sub-second precision.
//!
//! Provides `CivilTime`, the wall-clock representation of a birth instant.
//! It carries no zone; the zone is supplied where a civil time is compared
//! against astronomical instants.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Epoch;
use crate::error::TimeError;
use crate::julian::{J2000_JDN, date_from_jdn, days_in_month, julian_day_number};

/// Civil calendar date and clock time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Construct and validate in one step.
    pub fn try_new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        let t = Self::new(year, month, day, hour, minute, second);
        t.validate()?;
        Ok(t)
    }

    /// Midnight at the start of a date.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Check that every field lies on the Gregorian calendar and the 24 h clock.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidMonth { month: self.month });
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23
            || self.minute > 59
            || !self.second.is_finite()
            || !(0.0..60.0).contains(&self.second)
        {
            return Err(TimeError::InvalidClock {
                hour: self.hour,
                minute: self.minute,
                second: self.second,
            });
        }
        Ok(())
    }

    /// Julian Day Number of this civil date (time of day ignored).
    pub fn jdn(&self) -> i64 {
        julian_day_number(self.year, self.month, self.day)
    }

    /// Seconds past J2000.0 on this time's own (civil) scale.
    ///
    /// Whole-second civil times map to exactly representable epochs, so a
    /// civil time built from an epoch converts back to the identical value.
    pub fn to_epoch(&self) -> Epoch {
        let days = (self.jdn() - J2000_JDN) as f64;
        let clock = self.hour as f64 * 3600.0 + self.minute as f64 * 60.0 + self.second;
        Epoch::from_seconds(days * 86_400.0 + clock - 43_200.0)
    }

    /// Civil time for an epoch, rounded to the millisecond.
    pub fn from_epoch(epoch: Epoch) -> Self {
        let ms = (epoch.as_seconds() * 1000.0).round() as i64 + 43_200_000;
        let day = ms.div_euclid(86_400_000);
        let in_day = ms.rem_euclid(86_400_000);
        let (year, month, date) = date_from_jdn(J2000_JDN + day);
        let hour = (in_day / 3_600_000) as u32;
        let minute = ((in_day % 3_600_000) / 60_000) as u32;
        let second = (in_day % 60_000) as f64 / 1000.0;
        Self::new(year, month, date, hour, minute, second)
    }

    /// Fractional year, used as the argument of slowly varying corrections.
    pub fn decimal_year(&self) -> f64 {
        self.year as f64 + (self.month as f64 - 0.5) / 12.0
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` or `YYYY-MM-DDThh:mm:ss`
    /// (a space may replace `T`). The result is validated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date_part, time_part) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t.trim())),
            None => (s, None),
        };

        let date_fields: Vec<&str> = date_part.split('-').collect();
        if date_fields.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
        }
        let year: i32 = parse_field(date_fields[0], "year")?;
        let month: u32 = parse_field(date_fields[1], "month")?;
        let day: u32 = parse_field(date_fields[2], "day")?;

        let (hour, minute, second) = match time_part {
            None => (0, 0, 0.0),
            Some(t) => {
                let time_fields: Vec<&str> = t.split(':').collect();
                match time_fields.as_slice() {
                    [h, m] => (parse_field(h, "hour")?, parse_field(m, "minute")?, 0.0),
                    [h, m, sec] => (
                        parse_field(h, "hour")?,
                        parse_field(m, "minute")?,
                        parse_field(sec, "second")?,
                    ),
                    _ => {
                        return Err(TimeError::Parse(format!(
                            "expected hh:mm or hh:mm:ss, got {t:?}"
                        )));
                    }
                }
            }
        };

        Self::try_new(year, month, day, hour, minute, second)
    }
}

fn parse_field<T: FromStr>(text: &str, field: &str) -> Result<T, TimeError>
where
    T::Err: std::fmt::Display,
{
    text.trim()
        .parse()
        .map_err(|e| TimeError::Parse(format!("{field} {text:?}: {e}")))
}
