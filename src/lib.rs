//! # Route sequencer
//!
//! Plans the visiting order of a single vehicle over a small set of
//! geographic stops with a fixed start and an optional return to it.
//!
//! The order is built with a nearest-neighbour walk and then refined with
//! 2-opt local search over great-circle (haversine) distances. Distance,
//! drive time, service time and fuel figures are derived from the result.
//! This is a heuristic suited to tens of stops; it does not promise an
//! optimal tour.
//!
//! Rows without coordinates are geocoded through an injected
//! [`Geocoder`](resolver::Geocoder), one call at a time.

pub mod config;
pub mod construction;
pub mod distance;
pub mod error;
pub mod local_search;
pub mod metrics;
#[cfg(feature = "nominatim")]
pub mod nominatim;
pub mod problem;
pub mod resolver;
pub mod solution;
pub mod utils;

use log::info;

use crate::config::Config;
use crate::construction::nearest_neighbor;
use crate::error::PlanError;
use crate::local_search::LocalSearch;
use crate::problem::{Problem, RawRow};
use crate::resolver::{Geocoder, StopResolver};
use crate::solution::RoutePlan;

/// Orchestrates resolution, construction, refinement and assembly.
pub struct RoutePlanner<'a> {
    pub config: Config,
    geocoder: Option<&'a dyn Geocoder>,
}

impl<'a> RoutePlanner<'a> {
    /// Create a planner without a geocoder.
    pub fn new(config: Config) -> Self {
        RoutePlanner {
            config,
            geocoder: None,
        }
    }

    /// Use `geocoder` for rows without coordinates.
    pub fn with_geocoder(mut self, geocoder: &'a dyn Geocoder) -> Self {
        self.geocoder = Some(geocoder);
        self
    }

    /// Plan a route from `start` through all `stops`.
    ///
    /// Either returns a complete plan or fails without side effects beyond
    /// the geocoding calls already made.
    pub fn plan(&self, stops: &[RawRow], start: &RawRow) -> Result<RoutePlan, PlanError> {
        if stops.is_empty() {
            return Err(PlanError::InsufficientStops { count: 1 });
        }

        info!("planning route from `{}` over {} stops", start.label, stops.len());

        let resolver = StopResolver::new(self.geocoder, self.config.allow_online_geocoding);
        let visitables = resolver.resolve_all(stops)?;
        let start = resolver.resolve(start)?;

        let mut resolved = Vec::with_capacity(visitables.len() + 1);
        resolved.push(start);
        resolved.extend(visitables);
        let problem = Problem::new(resolved);

        let candidates: Vec<usize> = (1..problem.stops.len()).collect();
        let mut order = nearest_neighbor(&problem, 0, &candidates);

        let mut local_search = LocalSearch::new();
        local_search.refine(&mut order, &problem);

        let plan = RoutePlan::assemble(problem.stops, &order, &self.config)?;

        info!(
            "planned {} stops: {:.2} km after {} 2-opt moves in {} passes",
            plan.visited_stop_count(),
            plan.total_km,
            local_search.moves,
            local_search.passes
        );

        Ok(plan)
    }
}

/// Plan a route with the given configuration and optional geocoder.
pub fn plan_route(
    stops: &[RawRow],
    start: &RawRow,
    config: &Config,
    geocoder: Option<&dyn Geocoder>,
) -> Result<RoutePlan, PlanError> {
    let planner = RoutePlanner {
        config: config.clone(),
        geocoder,
    };
    planner.plan(stops, start)
}
