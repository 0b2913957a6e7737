//! Distance, time and fuel figures derived from a tour.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::PlanError;
use crate::utils::format_duration;

/// Summary figures of a planned route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total_km: f64,
    pub drive_hours: f64,
    /// `drive_hours` rendered as `H h M min`
    pub drive_duration: String,
    pub service_hours: f64,
    /// `service_hours` rendered as `H h M min`
    pub service_duration: String,
    pub fuel_liters: f64,
    pub fuel_cost: f64,
}

impl Metrics {
    /// Compute the figures for a route of `total_km` visiting `visited_stops`
    /// stops (the start and the return to it excluded).
    pub fn compute(total_km: f64, visited_stops: usize, config: &Config) -> Result<Self, PlanError> {
        if !total_km.is_finite() || total_km < 0.0 {
            return Err(PlanError::InvalidMetricsInput { total_km });
        }

        let drive_hours = total_km / config.avg_speed_kmh.max(1.0);
        let service_hours = config.service_minutes_per_stop / 60.0 * visited_stops as f64;
        let fuel_liters = total_km * config.fuel_consumption_per_100km / 100.0;
        let fuel_cost = fuel_liters * config.fuel_price_per_unit;

        Ok(Metrics {
            total_km,
            drive_hours,
            drive_duration: format_duration(drive_hours),
            service_hours,
            service_duration: format_duration(service_hours),
            fuel_liters,
            fuel_cost,
        })
    }

    /// Driving plus service time.
    pub fn total_hours(&self) -> f64 {
        self.drive_hours + self.service_hours
    }
}
