use anyhow::Context;
use chrono::{Datelike, Local};
use clap::{Args, Parser, Subcommand};
use climate_core::{
    ChatSession, ClimateAggregator, Config, LocationQuery, chat::chat_from_config,
    provider::source_from_config,
};

use crate::{interactive, output};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "climate", version, about = "Climate data explorer")]
pub struct Cli {
    /// Print machine-readable JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Coordinates; both or neither. Defaults to the configured home location.
#[derive(Debug, Args)]
pub struct LocationArgs {
    #[arg(long, allow_negative_numbers = true, requires = "lon")]
    pub lat: Option<f64>,

    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    pub lon: Option<f64>,
}

impl LocationArgs {
    fn resolve(&self, config: &Config) -> LocationQuery {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => LocationQuery::new(lat, lon),
            _ => config.home_or_default(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the chat webhook and home location.
    Configure,

    /// Current climate for every tracked city.
    Cities,

    /// Yearly mean temperature for the last six years.
    History {
        #[command(flatten)]
        location: LocationArgs,

        /// Last year of the series; defaults to the current year.
        #[arg(long)]
        until: Option<i32>,
    },

    /// Current temperature for the reference regions.
    Regions,

    /// Monthly precipitation totals for one calendar year.
    Rainfall {
        #[command(flatten)]
        location: LocationArgs,

        /// Calendar year; defaults to the current year.
        #[arg(long)]
        year: Option<i32>,
    },

    /// Estimated atmospheric CO₂ concentration.
    Co2,

    /// Current air quality.
    Air {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Ask the climate assistant. Without a question, starts an interactive chat.
    Chat {
        question: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load().context("Failed to load configuration")?;
        log::debug!("Loaded configuration: {config:?}");
        let json = self.json;
        let this_year = Local::now().year();

        match self.command {
            Command::Configure => {
                interactive::configure(&mut config)?;
                config.save()?;
                println!("Configuration saved to {}", Config::config_file_path()?.display());
            }
            Command::Chat { question } => {
                let mut session = ChatSession::new(chat_from_config(&config)?);
                match question {
                    Some(question) => {
                        if let Some(reply) = session.send(&question).await {
                            println!("{reply}");
                        }
                    }
                    None => interactive::chat(&mut session).await?,
                }
            }
            Command::Cities => {
                let records = aggregator(&config).all_cities().await;
                output::emit(json, records.as_slice(), output::print_cities)?;
            }
            Command::History { location, until } => {
                let query = location.resolve(&config);
                let points = aggregator(&config)
                    .historical_temperatures_ending(&query, until.unwrap_or(this_year))
                    .await;
                output::emit(json, points.as_slice(), output::print_history)?;
            }
            Command::Regions => {
                let regions = aggregator(&config).regional_averages().await;
                output::emit(json, regions.as_slice(), output::print_regions)?;
            }
            Command::Rainfall { location, year } => {
                let query = location.resolve(&config);
                let points = aggregator(&config)
                    .monthly_precipitation_for_year(&query, year.unwrap_or(this_year))
                    .await;
                output::emit(json, points.as_slice(), output::print_rainfall)?;
            }
            Command::Co2 => {
                let ppm = aggregator(&config).estimate_co2();
                output::emit(json, &ppm, output::print_co2)?;
            }
            Command::Air { location } => {
                let air = aggregator(&config).air_quality(&location.resolve(&config)).await;
                output::emit(json, &air, output::print_air_quality)?;
            }
        }

        Ok(())
    }
}

fn aggregator(config: &Config) -> ClimateAggregator {
    ClimateAggregator::new(source_from_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_coordinates_parse() {
        let cli = Cli::try_parse_from(["climate", "history", "--lat", "-34.6", "--lon", "-58.38"])
            .expect("valid args");

        let Command::History { location, until } = cli.command else {
            panic!("expected history");
        };
        assert_eq!(location.resolve(&Config::default()), LocationQuery::new(-34.6, -58.38));
        assert_eq!(until, None);
    }

    #[test]
    fn latitude_requires_longitude() {
        assert!(Cli::try_parse_from(["climate", "air", "--lat", "10"]).is_err());
    }

    #[test]
    fn missing_coordinates_use_home() {
        let cli = Cli::try_parse_from(["climate", "--json", "rainfall", "--year", "2024"])
            .expect("valid args");
        assert!(cli.json);

        let Command::Rainfall { location, year } = cli.command else {
            panic!("expected rainfall");
        };
        let mut cfg = Config::default();
        cfg.set_home(LocationQuery::new(1.0, 2.0));

        assert_eq!(location.resolve(&cfg), LocationQuery::new(1.0, 2.0));
        assert_eq!(year, Some(2024));
    }
}
