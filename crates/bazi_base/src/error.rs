//! Error types for the sexagenary tables and calendar rules.

use bazi_time::ErrorKind;

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors from table lookups and pure calendar rules.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum BaseError {
    /// A raw index fell outside a table.
    #[error("{what} index {index} out of range (expected < {limit})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        limit: usize,
    },
    /// Stem and branch of different parity never meet in the 60-cycle.
    #[error("{stem}{branch} is not a sexagenary pair (stem and branch parity differ)")]
    MismatchedParity { stem: Stem, branch: Branch },
    /// Text that names no known symbol.
    #[error("unknown {what}: {text:?}")]
    UnknownSymbol { what: &'static str, text: String },
    /// A year outside the supported calendar era.
    #[error("year {year} is outside the supported era {first}..={last}")]
    UnsupportedEra { year: i32, first: i32, last: i32 },
    /// Other out-of-domain arguments.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

impl BaseError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::UnsupportedEra { .. } => ErrorKind::UnsupportedEra,
            Self::MismatchedParity { .. } | Self::UnknownSymbol { .. } | Self::InvalidInput(_) => {
                ErrorKind::InvalidInput
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_pair() {
        let e = BaseError::MismatchedParity {
            stem: Stem::Jia,
            branch: Branch::Chou,
        };
        assert!(e.to_string().starts_with("甲丑"));
        assert_eq!(e.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn kinds() {
        let e = BaseError::OutOfRange {
            what: "stem",
            index: 10,
            limit: 10,
        };
        assert_eq!(e.kind(), ErrorKind::OutOfRange);
        assert_eq!(e.to_string(), "stem index 10 out of range (expected < 10)");
        let e = BaseError::UnsupportedEra {
            year: 1850,
            first: 1900,
            last: 2100,
        };
        assert_eq!(e.kind(), ErrorKind::UnsupportedEra);
    }
}
