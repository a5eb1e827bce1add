//! Chart conventions and reading request parameters.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Largest accepted distance of a civil zone from UT, hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// When the day pillar changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayBoundary {
    /// Civil midnight; the 23:00 子 block keeps the civil day pillar.
    #[default]
    Midnight,
    /// The 子 hour at 23:00; births from 23:00 take the next day's pillar.
    ZiHour,
}

/// Which symbols count towards the element tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TallyMode {
    /// The four stems and four branches only; always sums to 8.
    #[default]
    PrimaryOnly,
    /// Every hidden stem of every branch counts as well.
    WithHiddenStems,
}

/// Conventions for turning a civil birth time into pillars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    /// Zone of the birth time, hours ahead of UT.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: f64,
    #[serde(default)]
    pub day_boundary: DayBoundary,
    #[serde(default)]
    pub tally_mode: TallyMode,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: default_utc_offset_hours(),
            day_boundary: DayBoundary::default(),
            tally_mode: TallyMode::default(),
        }
    }
}

fn default_utc_offset_hours() -> f64 {
    8.0
}

impl ChartConfig {
    /// Check that the zone offset is a real civil zone.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.utc_offset_hours.is_finite()
            || self.utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS
        {
            return Err(ChartError::InvalidConfig(
                "utc_offset_hours must be within ±14 hours",
            ));
        }
        Ok(())
    }
}

/// How much of a reading to compute beyond the natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadingRequest {
    /// Number of luck cycles.
    #[serde(default = "default_step_count")]
    pub step_count: u32,
    /// First forecast year; the birth year when absent.
    #[serde(default)]
    pub forecast_start_year: Option<i32>,
    /// Number of annual pillars.
    #[serde(default = "default_forecast_years")]
    pub forecast_years: u32,
}

impl Default for ReadingRequest {
    fn default() -> Self {
        Self {
            step_count: default_step_count(),
            forecast_start_year: None,
            forecast_years: default_forecast_years(),
        }
    }
}

fn default_step_count() -> u32 {
    8
}
fn default_forecast_years() -> u32 {
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ChartConfig::default();
        assert_eq!(c.utc_offset_hours, 8.0);
        assert_eq!(c.day_boundary, DayBoundary::Midnight);
        assert_eq!(c.tally_mode, TallyMode::PrimaryOnly);
        let r = ReadingRequest::default();
        assert_eq!((r.step_count, r.forecast_years), (8, 12));
        assert_eq!(r.forecast_start_year, None);
    }

    #[test]
    fn validate_offset() {
        assert!(ChartConfig::default().validate().is_ok());
        let mut c = ChartConfig::default();
        c.utc_offset_hours = -14.0;
        assert!(c.validate().is_ok());
        c.utc_offset_hours = 14.5;
        assert!(c.validate().is_err());
        c.utc_offset_hours = f64::NAN;
        assert!(c.validate().is_err());
    }
}
