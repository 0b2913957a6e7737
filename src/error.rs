//! Error types for route planning.

use thiserror::Error;

/// Failure reported by a [`Geocoder`](crate::resolver::Geocoder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The lookup service knows no place for the query.
    #[error("no place found for `{query}`")]
    NotFound { query: String },
    /// The request did not complete (network, timeout or HTTP status).
    #[error("geocoding request failed: {message}")]
    Transport { message: String },
    /// The service answered with a payload that could not be interpreted.
    #[error("invalid geocoding response: {message}")]
    InvalidResponse { message: String },
}

/// Coarse classification of a [`PlanError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnresolvedLocation,
    GeocodeFailed,
    InsufficientStops,
    InvalidMetricsInput,
    InvalidOrder,
}

/// Terminal failure of a planning run. No route plan is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A row has no coordinates and online geocoding is disabled.
    #[error("`{label}` has no coordinates and online geocoding is disabled")]
    UnresolvedLocation { label: String },
    /// Geocoding a row failed.
    #[error("could not geocode `{label}`: {source}")]
    GeocodeFailed {
        label: String,
        #[source]
        source: GeocodeError,
    },
    /// A route needs the start plus at least one destination.
    #[error("a route needs a start and at least one destination, got {count} stop(s)")]
    InsufficientStops { count: usize },
    /// The total distance handed to the metrics step is negative or not finite.
    #[error("cannot derive metrics from a total distance of {total_km} km")]
    InvalidMetricsInput { total_km: f64 },
    /// A visiting order handed to assembly is not a permutation of the
    /// visitable stop indices.
    #[error("{order:?} is not an order of stops 1..{stop_count}")]
    InvalidOrder { order: Vec<usize>, stop_count: usize },
}

impl PlanError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlanError::UnresolvedLocation { .. } => ErrorKind::UnresolvedLocation,
            PlanError::GeocodeFailed { .. } => ErrorKind::GeocodeFailed,
            PlanError::InsufficientStops { .. } => ErrorKind::InsufficientStops,
            PlanError::InvalidMetricsInput { .. } => ErrorKind::InvalidMetricsInput,
            PlanError::InvalidOrder { .. } => ErrorKind::InvalidOrder,
        }
    }

    /// The label of the offending row, if the error concerns one.
    pub fn label(&self) -> Option<&str> {
        match self {
            PlanError::UnresolvedLocation { label } | PlanError::GeocodeFailed { label, .. } => {
                Some(label)
            }
            PlanError::InsufficientStops { .. }
            | PlanError::InvalidMetricsInput { .. }
            | PlanError::InvalidOrder { .. } => None,
        }
    }
}
