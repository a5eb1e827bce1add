//! Error types for civil time handling.

use std::fmt::{Display, Formatter};

/// Coarse classification shared by every error in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or out-of-domain arguments.
    InvalidInput,
    /// An instant or year outside the supported calendar era.
    UnsupportedEra,
    /// An internal index violated a table's domain.
    OutOfRange,
}

impl ErrorKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::InvalidInput => "InvalidInput",
            Self::UnsupportedEra => "UnsupportedEra",
            Self::OutOfRange => "OutOfRange",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from civil date/time validation and parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    #[error("month must be in 1..=12, got {month}")]
    InvalidMonth { month: u32 },
    /// Day outside the length of its month.
    #[error("day {day} is not valid for {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Hour, minute or second outside the civil clock.
    #[error("invalid clock time {hour:02}:{minute:02}:{second}")]
    InvalidClock { hour: u32, minute: u32, second: f64 },
    /// Text could not be parsed as a date/time.
    #[error("cannot parse date/time: {0}")]
    Parse(String),
}

impl TimeError {
    /// Every time error is a malformed input.
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            TimeError::InvalidDay { year: 2023, month: 2, day: 29 }.to_string(),
            "day 29 is not valid for 2023-02"
        );
        assert_eq!(
            TimeError::InvalidMonth { month: 0 }.to_string(),
            "month must be in 1..=12, got 0"
        );
    }

    #[test]
    fn all_time_errors_are_invalid_input() {
        assert_eq!(TimeError::Parse("x".into()).kind(), ErrorKind::InvalidInput);
        assert_eq!(ErrorKind::UnsupportedEra.to_string(), "UnsupportedEra");
    }
}
