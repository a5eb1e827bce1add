//! Four Pillars (八字) charts from a local birth time.
//!
//! This crate provides:
//! - `compute_chart`: year, month, day and hour pillars with the element tally
//! - `compute_luck_cycles`: direction, starting age and ten-year luck pillars
//! - `compute_annual_pillars`: one pillar per forecast year
//! - `compute_reading`: all three at once
//! - `ChartReport`: a serializable rendering for other programs

pub mod chart;
pub mod config;
pub mod dayun;
pub mod error;
pub mod liunian;
pub mod reading;
pub mod report;

pub use bazi_base::{Direction, Gender, Pillar, StartAge};
pub use bazi_time::{CivilTime, ErrorKind};
pub use chart::{ALL_POSITIONS, BaziChart, PillarPosition, compute_chart, element_tally};
pub use config::{ChartConfig, DayBoundary, MAX_UTC_OFFSET_HOURS, ReadingRequest, TallyMode};
pub use dayun::{DaYun, LuckPeriod, compute_luck_cycles};
pub use error::ChartError;
pub use liunian::{LiuNianEntry, compute_annual_pillars, compute_annual_pillars_with};
pub use reading::{BaziReading, compute_reading};
pub use report::{
    AnnualReport, ChartReport, ElementCounts, HiddenStemReport, LuckPeriodReport, LuckReport,
    PillarReport,
};
