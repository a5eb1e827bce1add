//! Process-wide jie boundary table.
//!
//! Holds the 12 month-opening terms of every solar year in the era plus the
//! closing 立春, as UT epochs in whole seconds, built once on first use.
//! Spans are half-open: an instant exactly on a boundary belongs to the term
//! that begins there.

use std::sync::LazyLock;

use bazi_base::{
    ALL_SOLAR_TERMS, BaseError, Branch, ERA_FIRST_YEAR, ERA_LAST_YEAR, JIE_PER_YEAR, SolarTerm,
    month_branch,
};
use bazi_time::{Epoch, day_of_year};
use tracing::debug;

use crate::error::JieqiError;
use crate::search::solar_term_epoch;

static JIE_TABLE: LazyLock<Result<JieTable, JieqiError>> = LazyLock::new(JieTable::build);

/// The shared boundary table; built on the first call.
pub fn jie_table() -> Result<&'static JieTable, JieqiError> {
    JIE_TABLE.as_ref().map_err(Clone::clone)
}

/// One solar month: the span between two consecutive jie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JieSpan {
    /// Solar year (starting at 立春) the month belongs to.
    pub solar_year: i32,
    /// Month ordinal, 0 = 寅 month (立春) .. 11 = 丑 month (小寒).
    pub ordinal: u8,
    /// UT, inclusive.
    pub start: Epoch,
    /// UT, exclusive.
    pub end: Epoch,
}

impl JieSpan {
    /// The jie opening this month.
    pub fn term(&self) -> SolarTerm {
        ALL_SOLAR_TERMS[2 * (self.ordinal % JIE_PER_YEAR) as usize]
    }

    /// Branch of this solar month.
    pub fn branch(&self) -> Branch {
        month_branch(self.ordinal)
    }

    pub fn duration_days(&self) -> f64 {
        self.start.days_until(self.end)
    }
}

/// Jie boundaries for solar years `ERA_FIRST_YEAR..=ERA_LAST_YEAR`.
#[derive(Debug, Clone)]
pub struct JieTable {
    first_year: i32,
    boundaries: Vec<Epoch>,
}

impl JieTable {
    fn build() -> Result<Self, JieqiError> {
        let years = (ERA_LAST_YEAR - ERA_FIRST_YEAR + 1) as usize;
        let mut boundaries = Vec::with_capacity(years * JIE_PER_YEAR as usize + 1);
        for year in ERA_FIRST_YEAR..=ERA_LAST_YEAR {
            for ordinal in 0..JIE_PER_YEAR {
                boundaries.push(solar_term_epoch(year, SolarTerm::jie(ordinal)?)?);
            }
        }
        boundaries.push(solar_term_epoch(ERA_LAST_YEAR + 1, SolarTerm::Lichun)?);
        debug!(
            entries = boundaries.len(),
            first_year = ERA_FIRST_YEAR,
            last_year = ERA_LAST_YEAR,
            "built solar-term boundary table"
        );
        Ok(Self {
            first_year: ERA_FIRST_YEAR,
            boundaries,
        })
    }

    /// Number of stored boundaries (never zero).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// First covered instant (立春 of the first solar year).
    pub fn first(&self) -> Epoch {
        self.boundaries[0]
    }

    /// End of coverage (立春 after the last solar year), exclusive.
    pub fn last(&self) -> Epoch {
        self.boundaries[self.boundaries.len() - 1]
    }

    /// All boundaries in time order.
    pub fn boundaries(&self) -> &[Epoch] {
        &self.boundaries
    }

    /// Whether `epoch` (UT) lies in `[first, last)`.
    pub fn covers(&self, epoch: Epoch) -> bool {
        epoch >= self.first() && epoch < self.last()
    }

    fn span(&self, i: usize) -> JieSpan {
        JieSpan {
            solar_year: self.first_year + (i / JIE_PER_YEAR as usize) as i32,
            ordinal: (i % JIE_PER_YEAR as usize) as u8,
            start: self.boundaries[i],
            end: self.boundaries[i + 1],
        }
    }

    fn era_error(&self, epoch: Epoch) -> JieqiError {
        JieqiError::UnsupportedEra {
            instant: epoch.to_civil(),
            first: self.first().to_civil(),
            last: self.last().to_civil(),
        }
    }

    /// Solar month containing `epoch` (UT).
    pub fn locate(&self, epoch: Epoch) -> Result<JieSpan, JieqiError> {
        let idx = self.boundaries.partition_point(|b| *b <= epoch);
        if idx == 0 || idx >= self.boundaries.len() {
            return Err(self.era_error(epoch));
        }
        Ok(self.span(idx - 1))
    }

    /// Start of month `ordinal` of `solar_year`.
    ///
    /// `(ERA_LAST_YEAR + 1, 0)`, the closing 立春, is also available.
    pub fn boundary(&self, solar_year: i32, ordinal: u8) -> Result<Epoch, JieqiError> {
        if ordinal >= JIE_PER_YEAR {
            return Err(BaseError::OutOfRange {
                what: "jie",
                index: ordinal as usize,
                limit: JIE_PER_YEAR as usize,
            }
            .into());
        }
        let idx = (solar_year as i64 - self.first_year as i64) * JIE_PER_YEAR as i64
            + ordinal as i64;
        usize::try_from(idx)
            .ok()
            .and_then(|i| self.boundaries.get(i).copied())
            .ok_or(
                BaseError::UnsupportedEra {
                    year: solar_year,
                    first: ERA_FIRST_YEAR,
                    last: ERA_LAST_YEAR,
                }
                .into(),
            )
    }

    /// 立春 of `solar_year`, which opens that year's pillar.
    pub fn lichun(&self, solar_year: i32) -> Result<Epoch, JieqiError> {
        self.boundary(solar_year, 0)
    }

    /// Gregorian day-of-year of a boundary, read on a clock `utc_offset_hours` ahead of UT.
    ///
    /// 小寒 (ordinal 11) falls in January of the next civil year; the result
    /// is the ordinal within that year.
    pub fn day_of_year(
        &self,
        solar_year: i32,
        ordinal: u8,
        utc_offset_hours: f64,
    ) -> Result<u32, JieqiError> {
        let local = self
            .boundary(solar_year, ordinal)?
            .shifted_hours(utc_offset_hours)
            .to_civil();
        Ok(day_of_year(local.year, local.month, local.day))
    }

    /// First boundary strictly after `epoch`.
    pub fn next_after(&self, epoch: Epoch) -> Result<Epoch, JieqiError> {
        Ok(self.locate(epoch)?.end)
    }

    /// Last boundary at or before `epoch`.
    pub fn at_or_before(&self, epoch: Epoch) -> Result<Epoch, JieqiError> {
        Ok(self.locate(epoch)?.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_time::CivilTime;

    fn table() -> &'static JieTable {
        jie_table().unwrap()
    }

    fn ut(t: CivilTime) -> Epoch {
        t.to_epoch().shifted_hours(-8.0)
    }

    #[test]
    fn size_and_order() {
        let t = table();
        assert_eq!(t.len(), 201 * 12 + 1);
        assert!(t.boundaries().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn months_are_29_to_32_days() {
        let t = table();
        for i in 0..t.len() - 1 {
            let d = t.span(i).duration_days();
            assert!((29.0..32.0).contains(&d), "span {i}: {d} days");
        }
    }

    #[test]
    fn locate_mid_month() {
        let span = table().locate(ut(CivilTime::new(2000, 1, 1, 0, 0, 0.0))).unwrap();
        assert_eq!(span.solar_year, 1999);
        assert_eq!(span.ordinal, 10);
        assert_eq!(span.term(), SolarTerm::Daxue);
        assert_eq!(span.branch(), Branch::Zi);
    }

    #[test]
    fn boundary_is_half_open() {
        let t = table();
        let lichun = t.lichun(2024).unwrap();
        let at = t.locate(lichun).unwrap();
        assert_eq!((at.solar_year, at.ordinal), (2024, 0));
        assert_eq!(at.start, lichun);
        let before = t.locate(Epoch::from_seconds(lichun.as_seconds() - 1.0)).unwrap();
        assert_eq!((before.solar_year, before.ordinal), (2023, 11));
        assert_eq!(before.end, lichun);
    }

    #[test]
    fn next_and_previous() {
        let t = table();
        let lichun = t.lichun(2024).unwrap();
        assert_eq!(t.at_or_before(lichun).unwrap(), lichun);
        assert!(t.next_after(lichun).unwrap() > lichun);
        assert_eq!(t.next_after(Epoch::from_seconds(lichun.as_seconds() - 1.0)).unwrap(), lichun);
    }

    #[test]
    fn era_edges() {
        let t = table();
        assert!(t.locate(t.first()).is_ok());
        assert!(t.locate(t.last()).is_err());
        let err = t.locate(ut(CivilTime::new(1900, 1, 15, 0, 0, 0.0))).unwrap_err();
        assert_eq!(err.kind(), bazi_time::ErrorKind::UnsupportedEra);
        assert!(t.boundary(1899, 11).is_err());
        assert!(t.boundary(2101, 0).is_ok());
        assert!(t.boundary(2101, 1).is_err());
        assert!(t.boundary(2000, 12).is_err());
    }

    #[test]
    fn lichun_day_of_year() {
        // 2024-02-04 → day 35; 2025-02-03 → day 34 (CST)
        assert_eq!(table().day_of_year(2024, 0, 8.0).unwrap(), 35);
        assert_eq!(table().day_of_year(2025, 0, 8.0).unwrap(), 34);
    }
}
