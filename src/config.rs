//! Configuration parameters for a planning run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Options of a planning run.
///
/// Missing fields in a JSON document keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Return to the start after the last stop
    pub round_trip: bool,
    /// Average driving speed in km/h (values below 1 are treated as 1)
    pub avg_speed_kmh: f64,
    /// Time spent at each visited stop, in minutes
    pub service_minutes_per_stop: f64,
    /// Fuel consumption in litres per 100 km
    pub fuel_consumption_per_100km: f64,
    /// Fuel price per litre
    pub fuel_price_per_unit: f64,
    /// Geocode rows without coordinates through the injected geocoder
    pub allow_online_geocoding: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            round_trip: true,
            avg_speed_kmh: 60.0,
            service_minutes_per_stop: 20.0,
            fuel_consumption_per_100km: 10.0,
            fuel_price_per_unit: 32.0,
            allow_online_geocoding: true,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Set whether the route returns to the start.
    pub fn with_round_trip(mut self, round_trip: bool) -> Self {
        self.round_trip = round_trip;
        self
    }

    /// Set the average driving speed.
    pub fn with_avg_speed_kmh(mut self, speed: f64) -> Self {
        self.avg_speed_kmh = speed;
        self
    }

    /// Set the service time per stop.
    pub fn with_service_minutes_per_stop(mut self, minutes: f64) -> Self {
        self.service_minutes_per_stop = minutes;
        self
    }

    /// Set the fuel consumption.
    pub fn with_fuel_consumption_per_100km(mut self, consumption: f64) -> Self {
        self.fuel_consumption_per_100km = consumption;
        self
    }

    /// Set the fuel price.
    pub fn with_fuel_price_per_unit(mut self, price: f64) -> Self {
        self.fuel_price_per_unit = price;
        self
    }

    /// Enable or disable online geocoding.
    pub fn with_online_geocoding(mut self, allow: bool) -> Self {
        self.allow_online_geocoding = allow;
        self
    }
}
