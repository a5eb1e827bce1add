//! Solar terms (节气) for Four Pillars month and year boundaries.
//!
//! This crate provides:
//! - Apparent solar longitude from a truncated VSOP87 series
//! - Newton search for the instant of any of the 24 terms
//! - A process-wide, read-only table of the 12 jie per solar year, 1900–2100
//! - The full list of 24 terms in a civil year

pub mod error;
pub mod search;
pub mod sun;
pub mod table;
pub mod terms;

pub use error::JieqiError;
pub use search::{solar_term_epoch, solar_term_jd_tt};
pub use sun::{aberration_deg, apparent_solar_longitude_deg, nutation_longitude_deg};
pub use table::{JieSpan, JieTable, jie_table};
pub use terms::{SolarTermEvent, solar_terms_for_year};
