//! Great-circle distances between coordinates.

use crate::problem::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the haversine distance between two coordinates in kilometres.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Index-based distance lookup used by tour construction and refinement.
pub trait DistanceModel {
    /// Distance in kilometres from stop `from` to stop `to`.
    fn distance(&self, from: usize, to: usize) -> f64;
}

impl<F> DistanceModel for F
where
    F: Fn(usize, usize) -> f64,
{
    fn distance(&self, from: usize, to: usize) -> f64 {
        self(from, to)
    }
}
