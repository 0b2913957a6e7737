//! Stops, input rows and the distance matrix for a routing run.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::distance::{haversine_km, DistanceModel};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(lat: f64, lng: f64) -> Self {
        Coordinate { lat, lng }
    }

    /// Parse a decimal `latitude,longitude` pair, e.g. `49.3, 15.7`.
    ///
    /// Only plain decimals are accepted (optional leading minus, optional
    /// fractional part); anything else is treated as an address.
    pub fn parse(text: &str) -> Option<Self> {
        let (lat, lng) = text.split_once(',')?;
        Some(Coordinate::new(parse_decimal(lat)?, parse_decimal(lng)?))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

fn parse_decimal(text: &str) -> Option<f64> {
    let text = text.trim();
    let digits = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || fraction.is_some_and(|f| !is_digits(f)) {
        return None;
    }

    text.parse().ok()
}

/// A resolved stop with a label and a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}

impl Stop {
    /// Create a new stop.
    pub fn new(label: impl Into<String>, lat: f64, lng: f64) -> Self {
        Stop {
            label: label.into(),
            lat,
            lng,
        }
    }

    /// The location of this stop.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    /// Great-circle distance to another stop in kilometres.
    pub fn distance(&self, other: &Stop) -> f64 {
        haversine_km(self.coordinate(), other.coordinate())
    }
}

/// A structured input row: a label with optional explicit coordinates.
///
/// Rows without coordinates are resolved by geocoding their label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    pub label: String,
    pub coordinates: Option<Coordinate>,
}

impl RawRow {
    /// Create a row with known coordinates.
    pub fn with_coordinates(label: impl Into<String>, coordinate: Coordinate) -> Self {
        RawRow {
            label: label.into(),
            coordinates: Some(coordinate),
        }
    }

    /// Create a row that still needs geocoding.
    pub fn unresolved(label: impl Into<String>) -> Self {
        RawRow {
            label: label.into(),
            coordinates: None,
        }
    }

    /// Parse a `Label` or `Label | locationText` line.
    ///
    /// When the last `|`-separated part is a `lat,lng` pair, the preceding
    /// parts form the label. Otherwise the whole trimmed line becomes the
    /// label, which doubles as the geocoding query. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line
            .split('|')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        let (last, head) = parts.split_last()?;

        match Coordinate::parse(last) {
            Some(coordinate) => {
                let label = if head.is_empty() {
                    line.trim().to_string()
                } else {
                    head.join(" | ")
                };
                Some(RawRow::with_coordinates(label, coordinate))
            }
            None => Some(RawRow::unresolved(line.trim())),
        }
    }

    /// Parse every non-blank line of a text block.
    pub fn parse_lines(text: &str) -> Vec<Self> {
        text.lines().filter_map(RawRow::parse).collect()
    }
}

/// The resolved stops of one run, with index 0 as the start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub stops: Vec<Stop>,
    pub distance_matrix: Vec<Vec<f64>>,
}

impl Problem {
    /// Create a problem from resolved stops; `stops[0]` is the start.
    pub fn new(stops: Vec<Stop>) -> Self {
        let distance_matrix = Self::compute_distance_matrix(&stops);

        Problem {
            stops,
            distance_matrix,
        }
    }

    /// Distance between two stop indices.
    pub fn get_distance(&self, from: usize, to: usize) -> f64 {
        self.distance_matrix[from][to]
    }

    /// Number of stops after the start.
    pub fn visitable_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Generate the full distance matrix for all stops.
    fn compute_distance_matrix(stops: &[Stop]) -> Vec<Vec<f64>> {
        let n = stops.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let d = stops[i].distance(&stops[j]);
                matrix[i][j] = d;
                matrix[j][i] = d;
            }
        }

        matrix
    }
}

impl DistanceModel for Problem {
    fn distance(&self, from: usize, to: usize) -> f64 {
        self.get_distance(from, to)
    }
}
