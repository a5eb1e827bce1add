//! Luck cycle (大运) pure math: direction, starting age and pillar sequence.
//!
//! Locating the boundary jie needs the solar-term table and lives in the
//! chart crate; everything here is table-free.

pub mod balance;
pub mod sequence;
pub mod types;

pub use balance::{start_age_breakdown, start_age_years};
pub use sequence::{luck_pillars, validate_step_count};
pub use types::{
    DAYS_PER_START_YEAR, DAYS_PER_YEAR, Direction, Gender, MAX_LUCK_STEPS, StartAge,
    YEARS_PER_CYCLE, luck_direction,
};
