//! Command-line front end: plan a route from a file of `Label | location` rows.

use clap::Parser;
use log::LevelFilter;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use route_sequencer::config::Config;
use route_sequencer::problem::RawRow;
use route_sequencer::resolver::{Geocoder, StaticGeocoder};
use route_sequencer::utils::format_summary;
use route_sequencer::RoutePlanner;

#[derive(Debug, Parser)]
#[command(version, about = "Plan the visiting order of a single-vehicle trip")]
struct Cli {
    /// File with one `Label` or `Label | lat,lng` / `Label | address` row per line
    rows: PathBuf,

    /// Start row, in the same format as the rows file
    #[arg(long)]
    start: String,

    /// JSON configuration file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// End at the last stop instead of returning to the start
    #[arg(long)]
    one_way: bool,

    /// Average speed in km/h
    #[arg(long)]
    speed: Option<f64>,

    /// Service time per stop in minutes
    #[arg(long)]
    service_minutes: Option<f64>,

    /// Fuel consumption in litres per 100 km
    #[arg(long)]
    consumption: Option<f64>,

    /// Fuel price per litre
    #[arg(long)]
    fuel_price: Option<f64>,

    /// Never geocode; rows without coordinates fail
    #[arg(long)]
    offline: bool,

    /// JSON gazetteer used instead of the online geocoder
    #[arg(long)]
    gazetteer: Option<PathBuf>,

    /// Base URL of the Nominatim instance
    #[cfg(feature = "nominatim")]
    #[arg(long, default_value = route_sequencer::nominatim::DEFAULT_BASE_URL)]
    nominatim_url: String,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn build_config(&self) -> Result<Config, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::new(),
        };

        if self.one_way {
            config = config.with_round_trip(false);
        }
        if let Some(speed) = self.speed {
            config = config.with_avg_speed_kmh(speed);
        }
        if let Some(minutes) = self.service_minutes {
            config = config.with_service_minutes_per_stop(minutes);
        }
        if let Some(consumption) = self.consumption {
            config = config.with_fuel_consumption_per_100km(consumption);
        }
        if let Some(price) = self.fuel_price {
            config = config.with_fuel_price_per_unit(price);
        }
        if self.offline {
            config = config.with_online_geocoding(false);
        }

        Ok(config)
    }

    fn build_geocoder(&self) -> Result<Option<Box<dyn Geocoder>>, Box<dyn std::error::Error>> {
        if self.offline {
            return Ok(None);
        }
        match &self.gazetteer {
            Some(path) => {
                let geocoder: Box<dyn Geocoder> = Box::new(StaticGeocoder::from_json_file(path)?);
                Ok(Some(geocoder))
            }
            None => self.online_geocoder(),
        }
    }

    #[cfg(feature = "nominatim")]
    fn online_geocoder(&self) -> Result<Option<Box<dyn Geocoder>>, Box<dyn std::error::Error>> {
        use route_sequencer::nominatim::{NominatimGeocoder, NominatimGeocoderConfig};

        let config = NominatimGeocoderConfig::new(self.nominatim_url.clone());
        let geocoder: Box<dyn Geocoder> = Box::new(NominatimGeocoder::with_config(config)?);
        Ok(Some(geocoder))
    }

    #[cfg(not(feature = "nominatim"))]
    fn online_geocoder(&self) -> Result<Option<Box<dyn Geocoder>>, Box<dyn std::error::Error>> {
        Ok(None)
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.build_config()?;
    let geocoder = cli.build_geocoder()?;

    let rows = RawRow::parse_lines(&fs::read_to_string(&cli.rows)?);
    let start = RawRow::parse(&cli.start).ok_or("the start row is empty")?;

    let mut planner = RoutePlanner::new(config);
    if let Some(geocoder) = geocoder.as_deref() {
        planner = planner.with_geocoder(geocoder);
    }
    let plan = planner.plan(&rows, &start)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", format_summary(&plan));
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
