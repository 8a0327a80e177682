//! AirSight CLI - next-day Air Quality Index forecasts by city.

use clap::Parser;
use std::path::PathBuf;

const LONG_ABOUT: &str = "\
Forecasts the Air Quality Index (AQI) for the upcoming day based on \
historical pollution trends, using a pre-trained machine learning model \
(random forest / gradient boosting or linear).

The model (aqi_model.json), city encoder (city_encoder.json) and historical \
table (aqi.csv or aqi.csv.gz) are read from the executable's directory \
unless --assets-dir is given.";

#[derive(Parser)]
#[command(
    name = "aqi-cli",
    version,
    about = "AirSight AI-powered air quality forecaster",
    long_about = LONG_ABOUT
)]
struct Cli {
    /// Directory holding the model, encoder and history files
    #[arg(long, global = true)]
    assets_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: aqi_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Asset directory override: {:?}", cli.assets_dir);
    aqi_cmd::run(cli.command, cli.assets_dir.as_deref())
}
