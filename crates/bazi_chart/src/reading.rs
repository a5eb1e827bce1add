//! A complete reading: natal chart, luck cycles and annual pillars.

use bazi_base::Gender;
use bazi_time::CivilTime;
use tracing::info;

use crate::chart::{BaziChart, compute_chart};
use crate::config::{ChartConfig, ReadingRequest};
use crate::dayun::{DaYun, compute_luck_cycles};
use crate::error::ChartError;
use crate::liunian::{LiuNianEntry, compute_annual_pillars_with};

#[derive(Debug, Clone, PartialEq)]
pub struct BaziReading {
    pub chart: BaziChart,
    pub luck: DaYun,
    pub annual: Vec<LiuNianEntry>,
}

/// Compute chart, luck cycles and annual pillars in one call.
///
/// Forecast years start at the birth year unless the request names one.
pub fn compute_reading(
    birth: CivilTime,
    gender: Gender,
    request: &ReadingRequest,
    config: &ChartConfig,
) -> Result<BaziReading, ChartError> {
    let chart = compute_chart(birth, config)?;
    let luck = compute_luck_cycles(
        chart.year,
        chart.month,
        birth,
        gender,
        request.step_count,
        config,
    )?;
    let start_year = request.forecast_start_year.unwrap_or(birth.year);
    let annual = compute_annual_pillars_with(start_year, request.forecast_years, config)?;

    info!(
        birth = %birth,
        gender = gender.name(),
        pillars = %chart,
        luck_cycles = luck.periods.len(),
        forecast_years = annual.len(),
        "computed reading"
    );
    Ok(BaziReading {
        chart,
        luck,
        annual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_birth_year() {
        let r = compute_reading(
            CivilTime::new(1984, 6, 15, 12, 30, 0.0),
            Gender::Male,
            &ReadingRequest::default(),
            &ChartConfig::default(),
        )
        .unwrap();
        assert_eq!(r.chart.to_string(), "甲子 庚午 庚辰 壬午");
        assert_eq!(r.luck.periods.len(), 8);
        assert_eq!(r.annual.len(), 12);
        assert_eq!(r.annual[0].year, 1984);
        assert_eq!(r.annual[0].pillar, r.chart.year);
    }

    #[test]
    fn explicit_forecast_start() {
        let request = ReadingRequest {
            step_count: 3,
            forecast_start_year: Some(2030),
            forecast_years: 2,
        };
        let r = compute_reading(
            CivilTime::new(1984, 6, 15, 12, 30, 0.0),
            Gender::Female,
            &request,
            &ChartConfig::default(),
        )
        .unwrap();
        assert_eq!(r.luck.periods.len(), 3);
        let years: Vec<i32> = r.annual.iter().map(|e| e.year).collect();
        assert_eq!(years, [2030, 2031]);
    }
}
