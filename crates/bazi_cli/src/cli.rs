use std::path::PathBuf;

use bazi_base::Gender;
use bazi_chart::{ChartConfig, DayBoundary, TallyMode};
use bazi_time::CivilTime;
use clap::{Parser, Subcommand};

/// Four Pillars (八字) charts, luck cycles and annual pillars.
#[derive(Parser)]
#[command(
    name = "bazi",
    version,
    about = "Four Pillars charts, luck cycles and annual pillars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file with [chart] and [forecast] tables.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Natal chart with luck cycles and annual pillars.
    Chart(ChartArgs),
    /// Luck cycles (大运) only.
    Dayun(DayunArgs),
    /// Annual pillars (流年) for a run of years.
    Liunian(LiunianArgs),
    /// The 24 solar terms (节气) of a year.
    Jieqi(JieqiArgs),
    /// Look up a pillar of the 60-cycle by index or by name.
    Pillar(PillarArgs),
}

/// Birth time, gender and chart conventions.
#[derive(clap::Args)]
pub struct BirthArgs {
    /// Local birth time (YYYY-MM-DDThh:mm[:ss]).
    #[arg(short, long)]
    pub date: CivilTime,

    /// male|female (also m/f, 男/女, 乾/坤).
    #[arg(short, long)]
    pub gender: Gender,

    /// Hours ahead of UT of the birth clock; overrides the config file.
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<f64>,

    /// Advance the day pillar at 23:00 instead of midnight.
    #[arg(long)]
    pub zi_hour: bool,

    /// Count hidden stems in the element tally.
    #[arg(long)]
    pub hidden_stems: bool,
}

impl BirthArgs {
    /// Apply command-line overrides to the file configuration.
    pub fn chart_config(&self, mut config: ChartConfig) -> ChartConfig {
        if let Some(offset) = self.offset {
            config.utc_offset_hours = offset;
        }
        if self.zi_hour {
            config.day_boundary = DayBoundary::ZiHour;
        }
        if self.hidden_stems {
            config.tally_mode = TallyMode::WithHiddenStems;
        }
        config
    }
}

/// Arguments for the `chart` subcommand.
#[derive(clap::Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub birth: BirthArgs,

    /// Number of luck cycles.
    #[arg(long)]
    pub steps: Option<u32>,

    /// First forecast year (default: the current year).
    #[arg(long)]
    pub from: Option<i32>,

    /// Number of forecast years.
    #[arg(long)]
    pub years: Option<u32>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `dayun` subcommand.
#[derive(clap::Args)]
pub struct DayunArgs {
    #[command(flatten)]
    pub birth: BirthArgs,

    /// Number of luck cycles.
    #[arg(long)]
    pub steps: Option<u32>,

    /// Print the luck cycles as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `liunian` subcommand.
#[derive(clap::Args)]
pub struct LiunianArgs {
    /// First forecast year (default: the current year).
    #[arg(long)]
    pub from: Option<i32>,

    /// Number of forecast years.
    #[arg(long)]
    pub years: Option<u32>,

    /// Hours ahead of UT for the 立春 times.
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<f64>,

    /// Print the annual pillars as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `jieqi` subcommand.
#[derive(clap::Args)]
pub struct JieqiArgs {
    /// Gregorian year.
    #[arg(long)]
    pub year: i32,

    /// Hours ahead of UT for the listed times.
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<f64>,
}

/// Arguments for the `pillar` subcommand.
#[derive(clap::Args)]
pub struct PillarArgs {
    /// Cycle index 0-59 or a pillar such as 甲子.
    pub query: String,
}
