//! Core types for luck cycle (大运) calculations.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::Polarity;
use crate::error::BaseError;

/// Mean Gregorian year, used to turn fractional-year ages into days.
pub const DAYS_PER_YEAR: f64 = 365.2425;

/// Length of one luck cycle in years.
pub const YEARS_PER_CYCLE: f64 = 10.0;

/// Days of elapsed time per year of starting age (3 days = 1 year).
pub const DAYS_PER_START_YEAR: f64 = 3.0;

/// Upper bound on generated luck cycles per request.
pub const MAX_LUCK_STEPS: u32 = 120;

/// Gender of the chart holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Male => "乾",
            Self::Female => "坤",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" | "乾" => Ok(Self::Male),
            "female" | "f" | "女" | "坤" => Ok(Self::Female),
            other => Err(BaseError::UnknownSymbol {
                what: "gender",
                text: other.to_string(),
            }),
        }
    }
}

/// Direction in which the luck cycles walk the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Direction for a year-stem polarity and gender.
    ///
    /// Yang male and yin female go forward; the other two go backward.
    pub const fn from_polarity(year_polarity: Polarity, gender: Gender) -> Self {
        match (year_polarity, gender) {
            (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => Self::Forward,
            (Polarity::Yang, Gender::Female) | (Polarity::Yin, Gender::Male) => Self::Backward,
        }
    }

    /// +1 for forward, -1 for backward.
    pub const fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Forward => "顺行",
            Self::Backward => "逆行",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Traditional reading of the starting age: years, months, days and hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartAge {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
}

impl Display for StartAge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}y {}m {}d {}h",
            self.years, self.months, self.days, self.hours
        )
    }
}

/// Direction for a year-stem polarity and gender.
pub fn luck_direction(year_polarity: Polarity, gender: Gender) -> Direction {
    Direction::from_polarity(year_polarity, gender)
}
