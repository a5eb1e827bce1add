//! Luck cycles (大运) anchored on the jie nearest to birth.
//!
//! The direction comes from the year stem's polarity and the gender. The
//! starting age is the time from birth to the next jie (forward) or back to
//! the previous jie (backward), scaled at 3 days per year. Each cycle then
//! lasts ten years of 365.2425 days, counted on the local clock from birth.

use std::fmt::{Display, Formatter};

use bazi_base::{
    DAYS_PER_YEAR, Direction, Gender, Pillar, StartAge, YEARS_PER_CYCLE, luck_direction,
    luck_pillars, start_age_breakdown, start_age_years, validate_step_count,
};
use bazi_jieqi::jie_table;
use bazi_time::{CivilTime, Epoch};
use tracing::debug;

use crate::chart::{BaziChart, birth_instant};
use crate::config::ChartConfig;
use crate::error::ChartError;

/// One ten-year luck cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuckPeriod {
    /// 1-based position in the sequence.
    pub order: u32,
    pub pillar: Pillar,
    /// Age at the start of the cycle, fractional years.
    pub start_age: f64,
    /// Age at the end of the cycle (exclusive), fractional years.
    pub end_age: f64,
    /// Local civil start, inclusive.
    pub start: CivilTime,
    /// Local civil end, exclusive.
    pub end: CivilTime,
}

impl LuckPeriod {
    /// Civil year in which the cycle begins.
    pub fn start_year(&self) -> i32 {
        self.start.year
    }

    /// Whether the local civil time `t` falls inside `[start, end)`.
    pub fn contains(&self, t: &CivilTime) -> Result<bool, ChartError> {
        t.validate()?;
        Ok(self.covers(t.to_epoch()))
    }

    fn covers(&self, local: Epoch) -> bool {
        local >= self.start.to_epoch() && local < self.end.to_epoch()
    }
}

/// The full luck cycle sequence of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DaYun {
    pub gender: Gender,
    pub direction: Direction,
    /// The jie the starting age is measured to, UT.
    pub anchor: Epoch,
    /// The same jie on the birth clock.
    pub anchor_local: CivilTime,
    /// Days between birth and the anchor jie, non-negative.
    pub elapsed_days: f64,
    /// Fractional starting age of the first cycle, years.
    pub start_age_years: f64,
    /// Traditional years/months/days/hours reading of the starting age.
    pub start_age: StartAge,
    pub periods: Vec<LuckPeriod>,
}

impl DaYun {
    /// The cycle in effect at local civil time `t`, if any.
    pub fn period_at(&self, t: &CivilTime) -> Result<Option<&LuckPeriod>, ChartError> {
        t.validate()?;
        let local = t.to_epoch();
        Ok(self.periods.iter().find(|p| p.covers(local)))
    }
}

impl Display for DaYun {
    /// `backward from 8.03y: 乙亥 甲戌 ...`
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} from {:.2}y:", self.direction, self.start_age_years)?;
        for p in &self.periods {
            write!(f, " {}", p.pillar)?;
        }
        Ok(())
    }
}

/// Compute `step_count` luck cycles for a birth.
///
/// `year_pillar` fixes the direction, `month_pillar` seeds the sequence, and
/// `birth` is read on the clock given by `config`. The month pillar itself
/// is not part of the sequence.
pub fn compute_luck_cycles(
    year_pillar: Pillar,
    month_pillar: Pillar,
    birth: CivilTime,
    gender: Gender,
    step_count: u32,
    config: &ChartConfig,
) -> Result<DaYun, ChartError> {
    validate_step_count(step_count)?;
    let utc = birth_instant(&birth, config)?;
    let direction = luck_direction(year_pillar.stem().polarity(), gender);

    let table = jie_table()?;
    let anchor = match direction {
        Direction::Forward => table.next_after(utc)?,
        Direction::Backward => table.at_or_before(utc)?,
    };
    let elapsed_days = utc.days_until(anchor).abs();
    let start_age = start_age_years(elapsed_days);

    let birth_local = birth.to_epoch();
    let start_age_of = |order: u32| start_age + YEARS_PER_CYCLE * order as f64;
    let periods = luck_pillars(month_pillar, direction, step_count)?
        .into_iter()
        .zip(1u32..)
        .map(|(pillar, order)| {
            let start_age = start_age_of(order - 1);
            let end_age = start_age_of(order);
            LuckPeriod {
                order,
                pillar,
                start_age,
                end_age,
                start: birth_local.add_days(start_age * DAYS_PER_YEAR).to_civil(),
                end: birth_local.add_days(end_age * DAYS_PER_YEAR).to_civil(),
            }
        })
        .collect();

    debug!(
        birth = %birth,
        direction = direction.name(),
        elapsed_days,
        start_age,
        step_count,
        "computed luck cycles"
    );

    Ok(DaYun {
        gender,
        direction,
        anchor,
        anchor_local: anchor.shifted_hours(config.utc_offset_hours).to_civil(),
        elapsed_days,
        start_age_years: start_age,
        start_age: start_age_breakdown(elapsed_days),
        periods,
    })
}

impl BaziChart {
    /// Luck cycles of this chart under the conventions it was computed with.
    pub fn luck_cycles(&self, gender: Gender, step_count: u32) -> Result<DaYun, ChartError> {
        compute_luck_cycles(
            self.year,
            self.month,
            self.birth,
            gender,
            step_count,
            &self.config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::compute_chart;
    use approx::assert_abs_diff_eq;

    fn chart_2000() -> BaziChart {
        compute_chart(CivilTime::new(2000, 1, 1, 0, 0, 0.0), &ChartConfig::default()).unwrap()
    }

    #[test]
    fn male_goes_backward_to_daxue() {
        let d = chart_2000().luck_cycles(Gender::Male, 8).unwrap();
        assert_eq!(d.direction, Direction::Backward);
        assert_abs_diff_eq!(d.start_age_years, 8.0307, epsilon = 1e-3);
        assert_eq!(
            (d.anchor_local.year, d.anchor_local.month, d.anchor_local.day),
            (1999, 12, 7)
        );
        let pillars: Vec<String> = d.periods.iter().map(|p| p.pillar.to_string()).collect();
        assert_eq!(pillars[..3], ["乙亥", "甲戌", "癸酉"]);
    }

    #[test]
    fn female_goes_forward_to_xiaohan() {
        let d = chart_2000().luck_cycles(Gender::Female, 8).unwrap();
        assert_eq!(d.direction, Direction::Forward);
        assert_abs_diff_eq!(d.start_age_years, 1.7918, epsilon = 1e-3);
        assert_eq!((d.anchor_local.month, d.anchor_local.day), (1, 6));
        assert_eq!(d.periods[0].pillar.to_string(), "丁丑");
    }

    #[test]
    fn periods_are_contiguous_decades() {
        let d = chart_2000().luck_cycles(Gender::Male, 9).unwrap();
        assert_eq!(d.periods.len(), 9);
        for (i, p) in d.periods.iter().enumerate() {
            assert_eq!(p.order, i as u32 + 1);
            assert_abs_diff_eq!(p.end_age - p.start_age, 10.0, epsilon = 1e-12);
        }
        for w in d.periods.windows(2) {
            assert_eq!(w[0].end, w[1].start);
            assert!(w[1].start_year() > w[0].start_year());
        }
        // 8.03 years after 2000-01-01
        assert_eq!(d.periods[0].start_year(), 2008);
        assert!(d.period_at(&CivilTime::date(2020, 6, 1)).unwrap().is_some());
        assert!(d.period_at(&CivilTime::date(2001, 6, 1)).unwrap().is_none());
    }

    #[test]
    fn period_lookup_rejects_invalid_clock() {
        let d = chart_2000().luck_cycles(Gender::Male, 8).unwrap();
        let bad = CivilTime::new(2020, 1, 1, 2_000_000, 0, 0.0);
        let e = d.period_at(&bad).unwrap_err();
        assert_eq!(e.kind(), bazi_time::ErrorKind::InvalidInput);
        assert!(d.periods[0].contains(&bad).is_err());
        assert!(d.period_at(&CivilTime::new(2020, 2, 30, 0, 0, 0.0)).is_err());

        let first = d.periods[0];
        assert!(first.contains(&first.start).unwrap());
        assert!(!first.contains(&first.end).unwrap());
    }

    #[test]
    fn rejects_bad_step_counts() {
        let c = chart_2000();
        assert!(c.luck_cycles(Gender::Male, 0).is_err());
        assert!(c.luck_cycles(Gender::Male, 121).is_err());
        assert!(c.luck_cycles(Gender::Male, 120).is_ok());
    }
}
