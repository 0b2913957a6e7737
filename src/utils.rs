//! Formatting helpers for durations and plan summaries.

use std::fmt;

use crate::problem::Stop;
use crate::solution::RoutePlan;

/// Format fractional hours as whole hours and rounded minutes, e.g. `1 h 30 min`.
///
/// The total is rounded to whole minutes before it is split, so a value
/// just under a full hour carries into the hour: `1.9999` renders as
/// `2 h 0 min`, never `1 h 60 min`.
pub fn format_duration(hours: f64) -> String {
    let total_minutes = (hours.max(0.0) * 60.0).round() as u64;
    format!("{} h {} min", total_minutes / 60, total_minutes % 60)
}

/// Display name of a stop within a plan; the start is shown as `Start: {label}`.
pub fn display_label(stop: &Stop, is_start: bool) -> String {
    if is_start {
        format!("Start: {}", stop.label)
    } else {
        stop.label.clone()
    }
}

/// Human-readable summary of a plan.
pub struct PlanSummary<'a>(pub &'a RoutePlan);

impl fmt::Display for PlanSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        let metrics = &plan.metrics;

        writeln!(f, "Distance: {:.1} km", plan.total_km)?;
        writeln!(f, "Drive: {}", metrics.drive_duration)?;
        writeln!(f, "Service: {}", metrics.service_duration)?;
        writeln!(
            f,
            "Fuel: {:.1} l ≈ {:.0}",
            metrics.fuel_liters, metrics.fuel_cost
        )?;
        writeln!(f, "Stops: {}", plan.stop_count())?;
        writeln!(f)?;

        for (i, (&idx, stop)) in plan
            .tour
            .indices()
            .iter()
            .zip(plan.ordered_stops())
            .enumerate()
        {
            writeln!(
                f,
                "{:>3}. {} ({:.6}, {:.6})",
                i + 1,
                display_label(stop, idx == 0),
                stop.lat,
                stop.lng
            )?;
        }

        Ok(())
    }
}

/// Render a plan as a human-readable summary.
pub fn format_summary(plan: &RoutePlan) -> String {
    PlanSummary(plan).to_string()
}
