//! Error types for solar-term search and table lookup.

use bazi_base::{BaseError, SolarTerm};
use bazi_time::{CivilTime, ErrorKind};

/// Errors from the solar-term engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum JieqiError {
    /// Instant outside the span covered by the boundary table.
    #[error("instant {instant} UT is outside the solar-term table ({first}..{last} UT)")]
    UnsupportedEra {
        instant: CivilTime,
        first: CivilTime,
        last: CivilTime,
    },
    /// Newton iteration on solar longitude failed to settle.
    #[error("solar-term search did not converge for {term} of solar year {year}")]
    NoConvergence { year: i32, term: SolarTerm },
    /// Error from the sexagenary tables.
    #[error(transparent)]
    Base(#[from] BaseError),
}

impl JieqiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedEra { .. } => ErrorKind::UnsupportedEra,
            Self::NoConvergence { .. } => ErrorKind::OutOfRange,
            Self::Base(e) => e.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let e = JieqiError::NoConvergence {
            year: 2000,
            term: SolarTerm::Lichun,
        };
        assert_eq!(e.kind(), ErrorKind::OutOfRange);
        assert_eq!(
            e.to_string(),
            "solar-term search did not converge for 立春 of solar year 2000"
        );
        let e: JieqiError = BaseError::InvalidInput("x").into();
        assert_eq!(e.kind(), ErrorKind::InvalidInput);
    }
}
