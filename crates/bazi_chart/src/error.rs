//! Error types for chart computation.

use bazi_base::BaseError;
use bazi_jieqi::JieqiError;
use bazi_time::{ErrorKind, TimeError};

/// Errors from chart, luck cycle and annual pillar computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Invalid birth date/time.
    #[error("invalid birth time: {0}")]
    Time(#[from] TimeError),
    /// Error from the sexagenary tables or calendar rules.
    #[error(transparent)]
    Base(#[from] BaseError),
    /// Error from the solar-term engine.
    #[error(transparent)]
    Jieqi(#[from] JieqiError),
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

impl ChartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Time(e) => e.kind(),
            Self::Base(e) => e.kind(),
            Self::Jieqi(e) => e.kind(),
            Self::InvalidConfig(_) => ErrorKind::InvalidInput,
        }
    }
}
