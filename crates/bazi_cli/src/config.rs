use std::path::Path;

use anyhow::{Context, Result};
use bazi_chart::{ChartConfig, ReadingRequest};
use serde::Deserialize;
use tracing::info;

/// Top-level configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaziToml {
    /// Chart conventions.
    #[serde(default)]
    pub chart: ChartConfig,

    /// Luck cycle count and forecast horizon.
    #[serde(default)]
    pub forecast: ReadingRequest,
}

/// Read the configuration file, or the defaults when none is given.
pub fn load(path: Option<&Path>) -> Result<BaziToml> {
    let Some(path) = path else {
        return Ok(BaziToml::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: BaziToml = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    config
        .chart
        .validate()
        .with_context(|| format!("invalid [chart] table in {}", path.display()))?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}
