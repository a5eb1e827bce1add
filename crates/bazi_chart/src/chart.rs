//! Natal chart: the four pillars of a birth instant.
//!
//! Bridges the solar-term table (year and month boundaries) with the
//! table-free rules for the day and hour pillars.

use std::fmt::{Display, Formatter};

use bazi_base::{
    ElementTally, Pillar, Stem, TenGod, Zodiac, day_pillar, hour_block, hour_pillar,
    month_pillar, ten_god, year_pillar,
};
use bazi_jieqi::jie_table;
use bazi_time::{CivilTime, Epoch};
use tracing::trace;

use crate::config::{ChartConfig, DayBoundary, TallyMode};
use crate::error::ChartError;

/// Which of the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "时柱",
        }
    }
}

/// A computed Four Pillars chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaziChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    pub tally: ElementTally,
    /// Conventions the chart was computed with.
    pub config: ChartConfig,
    /// Local civil birth time as given.
    pub birth: CivilTime,
    /// Birth instant in UT.
    pub birth_utc: Epoch,
    /// Solar year (starting at 立春) of the year pillar.
    pub solar_year: i32,
    /// Solar month ordinal, 0 = 寅 month.
    pub month_ordinal: u8,
}

impl BaziChart {
    /// Pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub fn pillar(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Day stem (日主), the reference for Ten God relations.
    pub fn day_master(&self) -> Stem {
        self.day.stem()
    }

    pub fn zodiac(&self) -> Zodiac {
        self.year.branch().zodiac()
    }

    /// Ten God of the stem at `position`; `None` for the day master itself.
    pub fn ten_god(&self, position: PillarPosition) -> Option<TenGod> {
        match position {
            PillarPosition::Day => None,
            _ => Some(ten_god(self.day_master(), self.pillar(position).stem())),
        }
    }

    /// Hidden stems of the branch at `position`, each with its Ten God.
    pub fn hidden_stems(&self, position: PillarPosition) -> Vec<(Stem, TenGod)> {
        let master = self.day_master();
        self.pillar(position)
            .branch()
            .hidden_stems()
            .iter()
            .map(|&s| (s, ten_god(master, s)))
            .collect()
    }
}

impl Display for BaziChart {
    /// `己卯 丙子 戊午 壬子`
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Local civil birth time to its UT instant.
pub(crate) fn birth_instant(birth: &CivilTime, config: &ChartConfig) -> Result<Epoch, ChartError> {
    config.validate()?;
    birth.validate()?;
    Ok(birth.to_epoch().shifted_hours(-config.utc_offset_hours))
}

/// Compute the four pillars and element tally for a local birth time.
///
/// The year changes at 立春 and the month at each jie, both compared as
/// absolute instants. The day and hour pillars follow the civil date and
/// clock hour; from 23:00 the hour stem already belongs to the next day,
/// and under [`DayBoundary::ZiHour`] so does the day pillar.
pub fn compute_chart(birth: CivilTime, config: &ChartConfig) -> Result<BaziChart, ChartError> {
    let utc = birth_instant(&birth, config)?;
    let table = jie_table()?;
    let span = table.locate(utc)?;

    let solar_year = span.solar_year;
    let year = year_pillar(solar_year);
    let month = month_pillar(year.stem(), span.ordinal)?;

    let late_zi = birth.hour >= 23;
    let civil_jdn = birth.jdn();
    let day = match config.day_boundary {
        DayBoundary::ZiHour if late_zi => day_pillar(civil_jdn + 1),
        _ => day_pillar(civil_jdn),
    };
    let hour_day = if late_zi {
        day_pillar(civil_jdn + 1)
    } else {
        day_pillar(civil_jdn)
    };
    let hour = hour_pillar(hour_day.stem(), hour_block(birth.hour)?)?;

    let chart = BaziChart {
        year,
        month,
        day,
        hour,
        tally: element_tally(&[year, month, day, hour], config.tally_mode),
        config: *config,
        birth,
        birth_utc: utc,
        solar_year,
        month_ordinal: span.ordinal,
    };
    trace!(
        birth = %chart.birth,
        solar_year,
        month_ordinal = span.ordinal,
        pillars = %chart,
        "computed chart"
    );
    Ok(chart)
}

/// Element occurrences over the stems and branches of `pillars`.
pub fn element_tally(pillars: &[Pillar], mode: TallyMode) -> ElementTally {
    let mut tally = ElementTally::new();
    tally.add_all(pillars.iter().map(|p| p.stem()));
    tally.add_all(pillars.iter().map(|p| p.branch()));
    if mode == TallyMode::WithHiddenStems {
        tally.add_all(
            pillars
                .iter()
                .flat_map(|p| p.branch().hidden_stems().iter().copied()),
        );
    }
    tally
}
