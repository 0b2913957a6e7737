//! Unit tests for great-circle distances.

use route_sequencer::distance::{haversine_km, DistanceModel, EARTH_RADIUS_KM};
use route_sequencer::problem::{Coordinate, Problem, Stop};

#[test]
fn test_same_point_is_zero() {
    let a = Coordinate::new(49.2, 15.6);
    assert_eq!(haversine_km(a, a), 0.0);
}

#[test]
fn test_one_tenth_degree_of_latitude() {
    // Along a meridian the great-circle distance is R * Δφ.
    let a = Coordinate::new(49.0, 15.0);
    let b = Coordinate::new(49.1, 15.0);
    let expected = EARTH_RADIUS_KM * 0.1_f64.to_radians();

    assert!((haversine_km(a, b) - expected).abs() < 1e-9);
    assert!((haversine_km(a, b) - 11.1195).abs() < 1e-3);
}

#[test]
fn test_symmetric() {
    let prague = Coordinate::new(50.0755, 14.4378);
    let brno = Coordinate::new(49.1951, 16.6068);

    assert_eq!(haversine_km(prague, brno), haversine_km(brno, prague));
}

#[test]
fn test_known_distance() {
    // Prague to Brno is roughly 185 km as the crow flies.
    let prague = Coordinate::new(50.0755, 14.4378);
    let brno = Coordinate::new(49.1951, 16.6068);
    let d = haversine_km(prague, brno);

    assert!(d > 180.0 && d < 190.0, "Prague to Brno should be ~185 km, got {}", d);
}

#[test]
fn test_antipodes() {
    let a = Coordinate::new(0.0, 0.0);
    let b = Coordinate::new(0.0, 180.0);

    assert!((haversine_km(a, b) - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
}

#[test]
fn test_problem_matrix_matches_haversine() {
    let stops = vec![
        Stop::new("A", 49.0, 15.0),
        Stop::new("B", 49.1, 15.0),
        Stop::new("C", 49.05, 15.3),
    ];
    let problem = Problem::new(stops.clone());

    for i in 0..stops.len() {
        assert_eq!(problem.get_distance(i, i), 0.0);
        for j in 0..stops.len() {
            let expected = haversine_km(stops[i].coordinate(), stops[j].coordinate());
            assert!((problem.distance(i, j) - expected).abs() < 1e-12);
            assert_eq!(problem.get_distance(i, j), problem.get_distance(j, i));
        }
    }
}

#[test]
fn test_closure_is_a_distance_model() {
    let line = |from: usize, to: usize| (from as f64 - to as f64).abs();
    assert_eq!(line.distance(2, 5), 3.0);
}
