//! Tours, legs and the final route plan.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Config;
use crate::error::PlanError;
use crate::local_search::utils::is_permutation_of;
use crate::metrics::Metrics;
use crate::problem::Stop;
use crate::utils::display_label;

/// Visiting order as stop indices. The first entry is the start; a round
/// trip repeats it at the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour(pub Vec<usize>);

impl Tour {
    /// Build `[start, order..., start?]`.
    pub fn assemble(start: usize, order: &[usize], round_trip: bool) -> Self {
        let mut indices = Vec::with_capacity(order.len() + 2);
        indices.push(start);
        indices.extend_from_slice(order);
        if round_trip {
            indices.push(start);
        }
        Tour(indices)
    }

    /// The stop indices in visiting order.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One directed edge of a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub from: Stop,
    pub to: Stop,
    pub distance_km: f64,
}

/// Result of one planning run.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Resolved stops; index 0 is the start
    pub stops: Vec<Stop>,
    pub tour: Tour,
    pub legs: Vec<Leg>,
    pub total_km: f64,
    pub round_trip: bool,
    pub metrics: Metrics,
}

impl RoutePlan {
    /// Assemble the plan from the resolved stops and the refined order of
    /// the visitable stops (indices into `stops`, start excluded).
    ///
    /// `order` must hold every index of `1..stops.len()` exactly once.
    pub fn assemble(stops: Vec<Stop>, order: &[usize], config: &Config) -> Result<Self, PlanError> {
        if stops.len() < 2 {
            return Err(PlanError::InsufficientStops { count: stops.len() });
        }
        let visitable: Vec<usize> = (1..stops.len()).collect();
        if !is_permutation_of(order, &visitable) {
            return Err(PlanError::InvalidOrder {
                order: order.to_vec(),
                stop_count: stops.len(),
            });
        }

        let tour = Tour::assemble(0, order, config.round_trip);
        let legs: Vec<Leg> = tour
            .indices()
            .iter()
            .tuple_windows()
            .map(|(&from, &to)| {
                let (from, to) = (&stops[from], &stops[to]);
                Leg {
                    from: from.clone(),
                    to: to.clone(),
                    distance_km: from.distance(to),
                }
            })
            .collect();
        let total_km: f64 = legs.iter().map(|leg| leg.distance_km).sum();

        let visited = visited_count(tour.len(), config.round_trip);
        let metrics = Metrics::compute(total_km, visited, config)?;

        Ok(RoutePlan {
            stops,
            tour,
            legs,
            total_km,
            round_trip: config.round_trip,
            metrics,
        })
    }

    /// Number of stops visited after leaving the start.
    pub fn visited_stop_count(&self) -> usize {
        visited_count(self.tour.len(), self.round_trip)
    }

    /// Number of distinct tour entries, the start included.
    pub fn stop_count(&self) -> usize {
        self.tour.len() - usize::from(self.round_trip)
    }

    /// Stops in visiting order, the closing return included.
    pub fn ordered_stops(&self) -> impl Iterator<Item = &Stop> + '_ {
        self.tour.indices().iter().map(|&idx| &self.stops[idx])
    }
}

fn visited_count(tour_len: usize, round_trip: bool) -> usize {
    tour_len.saturating_sub(1 + usize::from(round_trip))
}

impl fmt::Debug for RoutePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RoutePlan:")?;
        writeln!(f, "  Tour: {:?}", self.tour.indices())?;
        writeln!(f, "  Distance: {:.2} km", self.total_km)?;
        writeln!(f, "  Drive: {}", self.metrics.drive_duration)?;
        writeln!(f, "  Service: {}", self.metrics.service_duration)?;
        writeln!(
            f,
            "  Fuel: {:.2} l ({:.2})",
            self.metrics.fuel_liters, self.metrics.fuel_cost
        )?;

        let ends = self.tour.indices().iter().tuple_windows();
        for (i, ((&from, &to), leg)) in ends.zip(&self.legs).enumerate() {
            writeln!(
                f,
                "  Leg {}: {} -> {} ({:.2} km)",
                i,
                display_label(&leg.from, from == 0),
                display_label(&leg.to, to == 0),
                leg.distance_km
            )?;
        }

        Ok(())
    }
}
