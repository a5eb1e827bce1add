use anyhow::{Context, Result};
use bazi_base::{Pillar, pillar_at};
use bazi_chart::{
    AnnualReport, ChartReport, LuckReport, ReadingRequest, compute_annual_pillars_with,
    compute_chart, compute_reading,
};
use bazi_jieqi::solar_terms_for_year;
use chrono::{Datelike, Duration, Utc};
use serde::Serialize;
use tracing::debug;

use crate::cli::{ChartArgs, DayunArgs, JieqiArgs, LiunianArgs, PillarArgs};
use crate::config::BaziToml;
use crate::render;

/// Calendar year on a clock `utc_offset_hours` ahead of UT, right now.
fn current_year(utc_offset_hours: f64) -> i32 {
    let offset = Duration::seconds((utc_offset_hours * 3600.0).round() as i64);
    (Utc::now() + offset).year()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

pub fn chart(args: ChartArgs, file: &BaziToml) -> Result<()> {
    let config = args.birth.chart_config(file.chart);
    let request = ReadingRequest {
        step_count: args.steps.unwrap_or(file.forecast.step_count),
        forecast_start_year: Some(
            args.from
                .or(file.forecast.forecast_start_year)
                .unwrap_or_else(|| current_year(config.utc_offset_hours)),
        ),
        forecast_years: args.years.unwrap_or(file.forecast.forecast_years),
    };
    debug!(?config, ?request, "chart request");

    let reading = compute_reading(args.birth.date, args.birth.gender, &request, &config)
        .with_context(|| format!("failed to compute chart for {}", args.birth.date))?;

    if args.json {
        print_json(&ChartReport::from_reading(&reading))
    } else {
        println!("{}", render::reading(&reading));
        Ok(())
    }
}

pub fn dayun(args: DayunArgs, file: &BaziToml) -> Result<()> {
    let config = args.birth.chart_config(file.chart);
    let steps = args.steps.unwrap_or(file.forecast.step_count);
    let chart = compute_chart(args.birth.date, &config)
        .with_context(|| format!("failed to compute chart for {}", args.birth.date))?;
    let luck = chart
        .luck_cycles(args.birth.gender, steps)
        .context("failed to compute luck cycles")?;

    if args.json {
        print_json(&LuckReport::from(&luck))
    } else {
        println!("Chart: {chart}\n{}", render::luck(&luck));
        Ok(())
    }
}

pub fn liunian(args: LiunianArgs, file: &BaziToml) -> Result<()> {
    let mut config = file.chart;
    if let Some(offset) = args.offset {
        config.utc_offset_hours = offset;
    }
    let start = args
        .from
        .or(file.forecast.forecast_start_year)
        .unwrap_or_else(|| current_year(config.utc_offset_hours));
    let count = args.years.unwrap_or(file.forecast.forecast_years);
    let entries = compute_annual_pillars_with(start, count, &config)
        .with_context(|| format!("failed to compute {count} annual pillars from {start}"))?;

    if args.json {
        let reports: Vec<AnnualReport> = entries.iter().map(AnnualReport::from).collect();
        print_json(&reports)
    } else {
        println!("{}", render::annual(&entries));
        Ok(())
    }
}

pub fn jieqi(args: JieqiArgs, file: &BaziToml) -> Result<()> {
    let offset = args.offset.unwrap_or(file.chart.utc_offset_hours);
    let events = solar_terms_for_year(args.year)
        .with_context(|| format!("failed to compute solar terms for {}", args.year))?;
    println!("{}", render::solar_terms(&events, offset));
    Ok(())
}

/// Resolve a cycle index or a pillar name.
fn lookup_pillar(query: &str) -> Result<Pillar> {
    let query = query.trim();
    let pillar = match query.parse::<u8>() {
        Ok(index) => pillar_at(index)?,
        Err(_) => query.parse::<Pillar>()?,
    };
    Ok(pillar)
}

pub fn pillar(args: PillarArgs) -> Result<()> {
    let p = lookup_pillar(&args.query)
        .with_context(|| format!("no pillar matches {:?}", args.query))?;
    println!("{}", render::pillar(p));
    Ok(())
}
