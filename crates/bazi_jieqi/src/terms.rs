//! All 24 solar terms of a civil year.

use bazi_base::{ALL_SOLAR_TERMS, SolarTerm, check_era};
use bazi_time::{CivilTime, Epoch};

use crate::error::JieqiError;
use crate::search::solar_term_epoch;

/// One solar-term instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermEvent {
    pub term: SolarTerm,
    /// Solar year (starting at 立春) the term belongs to.
    pub solar_year: i32,
    /// UT, whole seconds.
    pub instant: Epoch,
}

impl SolarTermEvent {
    /// Civil time of the event on a clock `utc_offset_hours` ahead of UT.
    pub fn local(&self, utc_offset_hours: f64) -> CivilTime {
        self.instant.shifted_hours(utc_offset_hours).to_civil()
    }
}

/// The 24 terms falling in civil year `year`, in time order (小寒 first).
///
/// 小寒 and 大寒 in January belong to the previous solar year.
pub fn solar_terms_for_year(year: i32) -> Result<Vec<SolarTermEvent>, JieqiError> {
    check_era(year)?;
    let previous = [SolarTerm::Xiaohan, SolarTerm::Dahan]
        .into_iter()
        .map(|term| (year - 1, term));
    let current = ALL_SOLAR_TERMS[..22].iter().map(|&term| (year, term));
    previous
        .chain(current)
        .map(|(solar_year, term)| -> Result<SolarTermEvent, JieqiError> {
            Ok(SolarTermEvent {
                term,
                solar_year,
                instant: solar_term_epoch(solar_year, term)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_four_in_order() {
        let events = solar_terms_for_year(2024).unwrap();
        assert_eq!(events.len(), 24);
        assert_eq!(events[0].term, SolarTerm::Xiaohan);
        assert_eq!(events[0].solar_year, 2023);
        assert_eq!(events[2].term, SolarTerm::Lichun);
        assert_eq!(events[23].term, SolarTerm::Dongzhi);
        assert!(events.windows(2).all(|w| w[0].instant < w[1].instant));
        for e in &events {
            assert_eq!(e.local(8.0).year, 2024, "{}", e.term);
        }
    }

    #[test]
    fn dongzhi_2024() {
        // Almanac: 2024-12-21 17:20 CST
        let events = solar_terms_for_year(2024).unwrap();
        let local = events[23].local(8.0);
        assert_eq!((local.month, local.day, local.hour), (12, 21, 17));
    }

    #[test]
    fn outside_era() {
        assert!(solar_terms_for_year(1899).is_err());
        assert!(solar_terms_for_year(2101).is_err());
    }
}
