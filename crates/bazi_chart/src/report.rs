//! Structured, serializable form of a chart or reading.
//!
//! Symbols are rendered as text (hanzi plus romanized names) so that
//! consumers need no knowledge of the enums behind them.

use serde::Serialize;

use bazi_base::{Element, ElementTally, Pillar};

use crate::chart::{ALL_POSITIONS, BaziChart, PillarPosition};
use crate::config::{DayBoundary, TallyMode};
use crate::dayun::{DaYun, LuckPeriod};
use crate::liunian::LiuNianEntry;
use crate::reading::BaziReading;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiddenStemReport {
    pub stem: &'static str,
    pub element: &'static str,
    pub ten_god: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarReport {
    pub position: &'static str,
    /// `甲子`
    pub pillar: String,
    pub stem: &'static str,
    pub stem_pinyin: &'static str,
    pub stem_element: &'static str,
    pub polarity: &'static str,
    pub branch: &'static str,
    pub branch_pinyin: &'static str,
    pub branch_element: &'static str,
    pub cycle_index: u8,
    pub nayin: &'static str,
    /// Absent for the day pillar, whose stem is the day master.
    pub ten_god: Option<&'static str>,
    pub hidden_stems: Vec<HiddenStemReport>,
}

/// Element counts keyed by element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementCounts {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl From<&ElementTally> for ElementCounts {
    fn from(t: &ElementTally) -> Self {
        Self {
            wood: t.get(Element::Wood),
            fire: t.get(Element::Fire),
            earth: t.get(Element::Earth),
            metal: t.get(Element::Metal),
            water: t.get(Element::Water),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuckPeriodReport {
    pub order: u32,
    pub pillar: String,
    pub start_age: f64,
    pub end_age: f64,
    pub start: String,
    pub end: String,
    pub start_year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuckReport {
    pub gender: &'static str,
    pub direction: &'static str,
    pub anchor_jie: String,
    pub start_age_years: f64,
    /// `2y 4m 27d 12h`
    pub start_age: String,
    pub periods: Vec<LuckPeriodReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualReport {
    pub year: i32,
    pub pillar: String,
    pub zodiac: &'static str,
    pub lichun: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    pub birth: String,
    pub utc_offset_hours: f64,
    pub day_boundary: DayBoundary,
    pub tally_mode: TallyMode,
    /// `己卯 丙子 戊午 壬子`
    pub chart: String,
    pub pillars: Vec<PillarReport>,
    pub day_master: &'static str,
    pub elements: ElementCounts,
    pub missing_elements: Vec<&'static str>,
    pub zodiac: &'static str,
    pub zodiac_hanzi: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luck_cycles: Option<LuckReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annual_pillars: Vec<AnnualReport>,
}

impl ChartReport {
    /// Report of the natal chart alone.
    pub fn from_chart(chart: &BaziChart) -> Self {
        let zodiac = chart.zodiac();
        Self {
            birth: chart.birth.to_string(),
            utc_offset_hours: chart.config.utc_offset_hours,
            day_boundary: chart.config.day_boundary,
            tally_mode: chart.config.tally_mode,
            chart: chart.to_string(),
            pillars: ALL_POSITIONS
                .iter()
                .map(|&pos| pillar_report(chart, pos))
                .collect(),
            day_master: chart.day_master().hanzi(),
            elements: ElementCounts::from(&chart.tally),
            missing_elements: chart.tally.missing().into_iter().map(Element::name).collect(),
            zodiac: zodiac.name(),
            zodiac_hanzi: zodiac.hanzi(),
            luck_cycles: None,
            annual_pillars: Vec::new(),
        }
    }

    /// Report of a full reading.
    pub fn from_reading(reading: &BaziReading) -> Self {
        Self {
            luck_cycles: Some(LuckReport::from(&reading.luck)),
            annual_pillars: reading.annual.iter().map(AnnualReport::from).collect(),
            ..Self::from_chart(&reading.chart)
        }
    }
}

fn pillar_report(chart: &BaziChart, position: PillarPosition) -> PillarReport {
    let p: Pillar = chart.pillar(position);
    let (stem, branch) = (p.stem(), p.branch());
    PillarReport {
        position: position.name(),
        pillar: p.to_string(),
        stem: stem.hanzi(),
        stem_pinyin: stem.name(),
        stem_element: stem.element().name(),
        polarity: stem.polarity().name(),
        branch: branch.hanzi(),
        branch_pinyin: branch.name(),
        branch_element: branch.element().name(),
        cycle_index: p.cycle_index(),
        nayin: p.nayin().hanzi(),
        ten_god: chart.ten_god(position).map(|g| g.hanzi()),
        hidden_stems: chart
            .hidden_stems(position)
            .into_iter()
            .map(|(s, g)| HiddenStemReport {
                stem: s.hanzi(),
                element: s.element().name(),
                ten_god: g.hanzi(),
            })
            .collect(),
    }
}

impl From<&LuckPeriod> for LuckPeriodReport {
    fn from(p: &LuckPeriod) -> Self {
        Self {
            order: p.order,
            pillar: p.pillar.to_string(),
            start_age: p.start_age,
            end_age: p.end_age,
            start: p.start.to_string(),
            end: p.end.to_string(),
            start_year: p.start_year(),
        }
    }
}

impl From<&DaYun> for LuckReport {
    fn from(d: &DaYun) -> Self {
        Self {
            gender: d.gender.name(),
            direction: d.direction.name(),
            anchor_jie: d.anchor_local.to_string(),
            start_age_years: d.start_age_years,
            start_age: d.start_age.to_string(),
            periods: d.periods.iter().map(LuckPeriodReport::from).collect(),
        }
    }
}

impl From<&LiuNianEntry> for AnnualReport {
    fn from(e: &LiuNianEntry) -> Self {
        Self {
            year: e.year,
            pillar: e.pillar.to_string(),
            zodiac: e.zodiac.name(),
            lichun: e.lichun.map(|t| t.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::compute_chart;
    use crate::config::ChartConfig;
    use bazi_time::CivilTime;

    #[test]
    fn chart_report_fields() {
        let c = compute_chart(CivilTime::new(2000, 1, 1, 0, 0, 0.0), &ChartConfig::default())
            .unwrap();
        let r = ChartReport::from_chart(&c);
        assert_eq!(r.chart, "己卯 丙子 戊午 壬子");
        assert_eq!(r.pillars.len(), 4);
        assert_eq!(r.pillars[2].position, "day");
        assert_eq!(r.pillars[2].ten_god, None);
        assert_eq!(r.pillars[0].ten_god, Some("劫财"));
        assert_eq!(r.pillars[2].stem_element, "earth");
        assert_eq!(
            r.elements,
            ElementCounts {
                wood: 1,
                fire: 2,
                earth: 2,
                metal: 0,
                water: 3
            }
        );
        assert_eq!(r.missing_elements, ["metal"]);
        assert_eq!(r.zodiac, "Rabbit");
        assert!(r.luck_cycles.is_none());
    }
}
