use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::map::feature::LngLat;

#[derive(Debug, Parser)]
#[command(name = "mapa-seccions-tui", version, about = "Electoral and income map TUI")]
pub struct CliArgs {
    /// Print dataset stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Inspect one point headlessly and print its popup, e.g. --inspect "2.82,41.98"
    #[arg(long, value_name = "LNG,LAT")]
    pub inspect: Option<String>,

    /// Dataset to open (eleccions | renda)
    #[arg(long, value_name = "NAME")]
    pub dataset: Option<String>,

    /// Override the data directory
    #[arg(long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(dir) = &self.data_dir {
            std::env::set_var("DATA_DIR", dir);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    /// Parses `--inspect` into coordinates.
    pub fn parse_inspect(&self) -> Result<Option<LngLat>> {
        let Some(raw) = &self.inspect else {
            return Ok(None);
        };
        let (lng, lat) = raw
            .split_once(',')
            .ok_or_else(|| eyre!("--inspect expects LNG,LAT, got {raw:?}"))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| eyre!("invalid longitude in --inspect: {lng:?}"))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| eyre!("invalid latitude in --inspect: {lat:?}"))?;
        Ok(Some(LngLat::new(lng, lat)))
    }
}
