//! Command implementations for the AQI forecast CLI.
//!
//! Assets are loaded once per invocation and shared by reference with
//! every forecast the command performs.

use aqi_core::category::aqi_details;
use clap::Subcommand;
use log::info;
use std::path::Path;

pub mod assets;
pub mod forecast;
pub mod gauge;
pub mod interactive;
pub mod report;

use assets::Assets;
use report::{analyze, Outcome};

#[derive(Subcommand)]
pub enum Command {
    /// Forecast the next day's AQI for a city
    Predict {
        /// City name (case-insensitive, surrounding whitespace ignored)
        city: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Prompt for city names and forecast each one until EOF or `quit`
    Interactive,

    /// List the cities present in the historical data
    Cities,

    /// Show the category, color and health advisory for an AQI value
    Classify {
        #[arg(allow_negative_numbers = true)]
        aqi: i64,
    },
}

pub fn run(command: Command, assets_dir: Option<&Path>) -> anyhow::Result<()> {
    match command {
        Command::Predict { city, json } => {
            let assets = Assets::resolve_and_load(assets_dir);
            match analyze(&assets, &city) {
                outcome if json => println!("{}", outcome.render_json()?),
                Outcome::Forecast(report) => println!("{}", report.render_text()),
                Outcome::Warning { message } => eprintln!("Warning: {}", message),
                Outcome::Error { message } => anyhow::bail!("{}", message),
            }
            Ok(())
        }
        Command::Interactive => {
            let assets = Assets::resolve_and_load(assets_dir);
            let stdin = std::io::stdin();
            interactive::run_interactive(&assets, stdin.lock(), std::io::stdout())
        }
        Command::Cities => {
            let assets = Assets::resolve_and_load(assets_dir);
            let bundle = assets.bundle()?;
            info!("Listing {} cities", bundle.cities().len());
            for city in bundle.cities() {
                println!("{}", city);
            }
            match bundle.history().query_date_range()? {
                Some((first, last)) => eprintln!(
                    "{} cities, {} records from {} to {}",
                    bundle.cities().len(),
                    bundle.history().query_record_count()?,
                    first,
                    last
                ),
                None => eprintln!("Historical table is empty"),
            }
            Ok(())
        }
        Command::Classify { aqi } => {
            let (color, category, advisory) = aqi_details(aqi);
            println!("AQI {}: {} ({})", aqi, category, color);
            println!("Health Advisory: {}", advisory);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../fixtures")
    }

    fn predict(city: &str, dir: &Path) -> anyhow::Result<()> {
        run(
            Command::Predict {
                city: city.to_string(),
                json: false,
            },
            Some(dir),
        )
    }

    #[test]
    fn predict_known_city_succeeds() {
        assert!(predict("Delhi", &fixtures_dir()).is_ok());
    }

    #[test]
    fn predict_blank_input_is_not_fatal() {
        assert!(predict("   ", &fixtures_dir()).is_ok());
        assert!(predict("", Path::new("/nonexistent/airsight")).is_ok());
    }

    #[test]
    fn predict_unknown_city_fails_with_bare_message() {
        let err = predict("  Atlantis ", &fixtures_dir()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "City 'Atlantis' not found in the dataset. Please check the spelling."
        );
    }

    #[test]
    fn predict_without_assets_fails() {
        let err = predict("Delhi", Path::new("/nonexistent/airsight")).unwrap_err();
        assert!(err.to_string().starts_with("Prediction is unavailable"));
        assert!(err.to_string().contains("aqi_model.json"));
    }

    #[test]
    fn predict_json_never_fails_on_outcome() {
        let command = Command::Predict {
            city: "Atlantis".to_string(),
            json: true,
        };
        assert!(run(command, Some(&fixtures_dir())).is_ok());
    }

    #[test]
    fn classify_accepts_negative_values() {
        for args in [
            vec!["aqi-cli", "classify", "--", "-5"],
            vec!["aqi-cli", "classify", "-5"],
        ] {
            let cli = TestCli::try_parse_from(args).unwrap();
            assert!(matches!(cli.command, Command::Classify { aqi: -5 }));
            assert!(run(cli.command, None).is_ok());
        }
    }

    #[test]
    fn classify_needs_no_assets() {
        let command = Command::Classify { aqi: 1000 };
        assert!(run(command, Some(Path::new("/nonexistent/airsight"))).is_ok());
    }

    #[test]
    fn cities_requires_assets() {
        assert!(run(Command::Cities, Some(&fixtures_dir())).is_ok());
        assert!(run(Command::Cities, Some(Path::new("/nonexistent/airsight"))).is_err());
    }
}
