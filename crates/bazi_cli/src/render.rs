//! Plain-text rendering of computed results.

use bazi_base::Pillar;
use bazi_chart::{ALL_POSITIONS, BaziChart, BaziReading, DaYun, LiuNianEntry};
use bazi_jieqi::SolarTermEvent;
use bazi_time::CivilTime;

pub fn chart(c: &BaziChart) -> String {
    let master = c.day_master();
    let zodiac = c.zodiac();
    let mut lines = vec![
        format!("Birth:      {} UTC{:+}", c.birth, c.config.utc_offset_hours),
        format!("Chart:      {c}"),
        format!("Zodiac:     {} ({})", zodiac.name(), zodiac.hanzi()),
        format!(
            "Day master: {} ({} {})",
            master.hanzi(),
            master.polarity(),
            master.element()
        ),
    ];
    for pos in ALL_POSITIONS {
        let p = c.pillar(pos);
        let god = c.ten_god(pos).map_or("日主", |g| g.hanzi());
        let hidden: Vec<String> = c
            .hidden_stems(pos)
            .into_iter()
            .map(|(s, g)| format!("{s}({g})"))
            .collect();
        lines.push(format!(
            "  {:<6} {}  {}  {}  hidden {}",
            pos.name(),
            p,
            god,
            p.nayin().hanzi(),
            hidden.join(" ")
        ));
    }
    lines.push(format!("Elements:   {}", c.tally));
    let missing = c.tally.missing();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|e| e.name()).collect();
        lines.push(format!("Missing:    {}", names.join(", ")));
    }
    lines.join("\n")
}

pub fn luck(d: &DaYun) -> String {
    let mut lines = vec![
        format!(
            "Luck cycles: {} ({}), {}",
            d.direction,
            d.direction.hanzi(),
            d.gender
        ),
        format!(
            "Start age:   {:.2} years ({}), from jie at {}",
            d.start_age_years, d.start_age, d.anchor_local
        ),
    ];
    for p in &d.periods {
        lines.push(format!(
            "  {:>3}  {}  age {:>6.2} - {:>6.2}  from {}",
            p.order,
            p.pillar,
            p.start_age,
            p.end_age,
            date(p.start)
        ));
    }
    lines.join("\n")
}

fn date(t: CivilTime) -> String {
    format!("{:04}-{:02}-{:02}", t.year, t.month, t.day)
}

pub fn annual(entries: &[LiuNianEntry]) -> String {
    let mut lines = vec!["Annual pillars:".to_string()];
    for e in entries {
        let lichun = e
            .lichun
            .map_or_else(|| "-".to_string(), |t| t.to_string());
        lines.push(format!(
            "  {}  {}  {:<8} 立春 {}",
            e.year,
            e.pillar,
            e.zodiac.name(),
            lichun
        ));
    }
    lines.join("\n")
}

pub fn reading(r: &BaziReading) -> String {
    [chart(&r.chart), luck(&r.luck), annual(&r.annual)].join("\n\n")
}

pub fn solar_terms(events: &[SolarTermEvent], utc_offset_hours: f64) -> String {
    let mut lines = Vec::with_capacity(events.len() + 1);
    lines.push(format!("Solar terms (UTC{utc_offset_hours:+}):"));
    for e in events {
        let marker = if e.term.is_jie() { "jie" } else { "qi" };
        lines.push(format!(
            "  {}  {:<12} {:>3}°  {}  {}",
            e.term.hanzi(),
            e.term.name(),
            e.term.longitude_deg(),
            marker,
            e.local(utc_offset_hours)
        ));
    }
    lines.join("\n")
}

pub fn pillar(p: Pillar) -> String {
    let nayin = p.nayin();
    let (stem, branch) = (p.stem(), p.branch());
    [
        format!("{:>2}  {}  {} {}", p.cycle_index(), p, stem.name(), branch.name()),
        format!(
            "    stem   {} {} {}",
            stem.hanzi(),
            stem.polarity(),
            stem.element()
        ),
        format!(
            "    branch {} {} {} ({})",
            branch.hanzi(),
            branch.element(),
            branch.zodiac().name(),
            branch.zodiac().hanzi()
        ),
        format!(
            "    nayin  {} ({}, {})",
            nayin.hanzi(),
            nayin.name(),
            nayin.element()
        ),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_chart::{ChartConfig, Gender, compute_chart};

    #[test]
    fn chart_text() {
        let c = compute_chart(CivilTime::new(2000, 1, 1, 0, 0, 0.0), &ChartConfig::default())
            .unwrap();
        let text = chart(&c);
        assert!(text.contains("Chart:      己卯 丙子 戊午 壬子"));
        assert!(text.contains("UTC+8"));
        assert!(text.contains("日主"));
        assert!(text.contains("Missing:    metal"));
    }

    #[test]
    fn luck_text() {
        let c = compute_chart(CivilTime::new(2000, 1, 1, 0, 0, 0.0), &ChartConfig::default())
            .unwrap();
        let d = c.luck_cycles(Gender::Male, 3).unwrap();
        let text = luck(&d);
        assert!(text.starts_with("Luck cycles: backward (逆行), male"));
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("乙亥"));
    }

    #[test]
    fn pillar_text() {
        let p = "甲子".parse::<Pillar>().unwrap();
        let text = pillar(p);
        assert!(text.starts_with(" 0  甲子"));
        assert!(text.contains("海中金"));
    }
}
