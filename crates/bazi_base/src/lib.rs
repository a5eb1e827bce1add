//! Sexagenary tables and table-free calendar rules for Four Pillars (八字) charts.
//!
//! This crate provides:
//! - Stems, branches, elements, polarity and zodiac animals as closed enums
//! - `Pillar`, a parity-checked (Stem, Branch) pair of the 60-cycle
//! - Year/day cycle anchors and the supported era
//! - Five Tigers / Five Rats month and hour rules
//! - The 24 solar terms, hidden stems, Ten Gods and Na Yin
//! - Luck cycle and annual pillar math that needs no solar-term table

pub mod branch;
pub mod cycle;
pub mod dayun;
pub mod element;
pub mod error;
pub mod liunian;
pub mod nayin;
pub mod pillar;
pub mod rules;
pub mod solar_term;
pub mod stem;
pub mod ten_god;

pub use bazi_time::ErrorKind;
pub use branch::{ALL_BRANCHES, ALL_ZODIACS, Branch, Zodiac, branch_of};
pub use cycle::{
    DAY_ANCHOR_JDN, ERA_FIRST_YEAR, ERA_LAST_YEAR, YEAR_ANCHOR, check_era, day_cycle_index,
    day_pillar, day_pillar_of_date, year_cycle_index, year_pillar,
};
pub use dayun::{
    DAYS_PER_START_YEAR, DAYS_PER_YEAR, Direction, Gender, MAX_LUCK_STEPS, StartAge,
    YEARS_PER_CYCLE, luck_direction, luck_pillars, start_age_breakdown, start_age_years,
    validate_step_count,
};
pub use element::{ALL_ELEMENTS, Element, ElementTally, Elemental, Polarity, element_of};
pub use error::BaseError;
pub use liunian::{MAX_FORECAST_YEARS, REFERENCE_MONTH, annual_pillar, annual_years};
pub use nayin::NaYin;
pub use pillar::{CYCLE_LEN, Pillar, all_pillars, cycle_index_of, pillar_at};
pub use rules::{FIVE_RATS, FIVE_TIGERS, HOUR_BLOCKS, hour_block, hour_pillar, month_pillar};
pub use solar_term::{ALL_SOLAR_TERMS, JIE_PER_YEAR, SolarTerm, month_branch};
pub use stem::{ALL_STEMS, Stem, polarity_of, stem_of};
pub use ten_god::{TenGod, ten_god};
