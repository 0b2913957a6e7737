//! Turning input rows into resolved stops.
//!
//! Rows that carry coordinates are used as they are. Rows without them are
//! looked up through an injected [`Geocoder`], one call per row, strictly in
//! input order. The first failure aborts the whole resolution.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{GeocodeError, PlanError};
use crate::problem::{Coordinate, RawRow, Stop};

/// Resolves free-form address text into a coordinate.
pub trait Geocoder {
    /// Look up `query` and return the coordinate of the best match.
    ///
    /// Called at most once per row; implementations do not retry.
    fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError>;
}

/// Resolves rows into stops, geocoding the ones without coordinates.
pub struct StopResolver<'a> {
    geocoder: Option<&'a dyn Geocoder>,
    allow_online: bool,
}

impl<'a> StopResolver<'a> {
    /// Create a resolver. Without a geocoder every unresolved row fails
    /// with [`PlanError::UnresolvedLocation`].
    pub fn new(geocoder: Option<&'a dyn Geocoder>, allow_online: bool) -> Self {
        StopResolver {
            geocoder,
            allow_online,
        }
    }

    /// Resolve a single row.
    pub fn resolve(&self, row: &RawRow) -> Result<Stop, PlanError> {
        if let Some(coordinate) = row.coordinates {
            return Ok(Stop::new(row.label.clone(), coordinate.lat, coordinate.lng));
        }

        let geocoder = match self.geocoder {
            Some(geocoder) if self.allow_online => geocoder,
            _ => {
                return Err(PlanError::UnresolvedLocation {
                    label: row.label.clone(),
                })
            }
        };

        debug!("geocoding `{}`", row.label);
        match geocoder.resolve(&row.label) {
            Ok(coordinate) => {
                debug!("`{}` resolved to {}", row.label, coordinate);
                Ok(Stop::new(row.label.clone(), coordinate.lat, coordinate.lng))
            }
            Err(source) => {
                warn!("geocoding `{}` failed: {}", row.label, source);
                Err(PlanError::GeocodeFailed {
                    label: row.label.clone(),
                    source,
                })
            }
        }
    }

    /// Resolve all rows in order, stopping at the first failure.
    pub fn resolve_all(&self, rows: &[RawRow]) -> Result<Vec<Stop>, PlanError> {
        rows.iter().map(|row| self.resolve(row)).collect()
    }
}

/// A geocoder backed by a fixed lookup table.
///
/// Useful offline (a gazetteer file) and as a deterministic stand-in for a
/// live service.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticGeocoder {
    places: HashMap<String, Coordinate>,
    #[serde(skip)]
    lookups: Cell<usize>,
}

impl StaticGeocoder {
    /// Create an empty table.
    pub fn new() -> Self {
        StaticGeocoder::default()
    }

    /// Add a place to the table.
    pub fn with_place(mut self, query: impl Into<String>, coordinate: Coordinate) -> Self {
        self.places.insert(query.into(), coordinate);
        self
    }

    /// Load a table from a JSON object mapping queries to `{"lat", "lng"}`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Number of lookups served so far, successful or not.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl Geocoder for StaticGeocoder {
    fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError> {
        self.lookups.set(self.lookups.get() + 1);
        self.places
            .get(query)
            .copied()
            .ok_or_else(|| GeocodeError::NotFound {
                query: query.to_string(),
            })
    }
}
