//! Unit tests for duration formatting and trip metrics.

use route_sequencer::config::Config;
use route_sequencer::error::PlanError;
use route_sequencer::metrics::Metrics;
use route_sequencer::problem::Stop;
use route_sequencer::solution::RoutePlan;
use route_sequencer::utils::{display_label, format_duration, format_summary, PlanSummary};

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0.0), "0 h 0 min");
    assert_eq!(format_duration(1.5), "1 h 30 min");
    assert_eq!(format_duration(0.25), "0 h 15 min");
    assert_eq!(format_duration(2.0 + 7.4 / 60.0), "2 h 7 min");
    assert_eq!(format_duration(2.0 + 7.6 / 60.0), "2 h 8 min");
}

#[test]
fn test_format_duration_carries_rounded_hour() {
    assert_eq!(format_duration(1.9999), "2 h 0 min");
}

#[test]
fn test_metrics_arithmetic() {
    let config = Config::new()
        .with_avg_speed_kmh(60.0)
        .with_service_minutes_per_stop(20.0)
        .with_fuel_consumption_per_100km(10.0)
        .with_fuel_price_per_unit(32.0);

    let metrics = Metrics::compute(90.0, 3, &config).expect("metrics");

    assert!((metrics.drive_hours - 1.5).abs() < 1e-12);
    assert_eq!(metrics.drive_duration, "1 h 30 min");
    assert!((metrics.service_hours - 1.0).abs() < 1e-12);
    assert_eq!(metrics.service_duration, "1 h 0 min");
    assert!((metrics.fuel_liters - 9.0).abs() < 1e-12);
    assert!((metrics.fuel_cost - 288.0).abs() < 1e-9);
    assert!((metrics.total_hours() - 2.5).abs() < 1e-12);
}

#[test]
fn test_slow_speed_is_clamped_to_one() {
    let config = Config::new().with_avg_speed_kmh(0.0);

    let metrics = Metrics::compute(3.0, 1, &config).expect("metrics");

    assert!((metrics.drive_hours - 3.0).abs() < 1e-12);
}

#[test]
fn test_service_time_independent_of_speed() {
    let slow = Metrics::compute(100.0, 4, &Config::new().with_avg_speed_kmh(10.0)).expect("metrics");
    let fast = Metrics::compute(100.0, 4, &Config::new().with_avg_speed_kmh(120.0)).expect("metrics");

    assert_eq!(slow.service_hours, fast.service_hours);
    assert_eq!(slow.service_duration, "1 h 20 min");
}

#[test]
fn test_invalid_total_distance() {
    for total_km in [-1.0, f64::NAN, f64::INFINITY] {
        let err = Metrics::compute(total_km, 1, &Config::new()).expect_err("should fail");
        assert!(matches!(err, PlanError::InvalidMetricsInput { .. }));
    }
}

#[test]
fn test_summary_lists_stops_in_order() {
    let stops = vec![
        Stop::new("Depot", 49.0, 15.0),
        Stop::new("B", 49.1, 15.0),
    ];
    let plan = RoutePlan::assemble(stops, &[1], &Config::new()).expect("plan");

    let summary = format_summary(&plan);

    assert!(summary.contains("Stops: 2"));
    assert!(summary.contains("  1. Start: Depot (49.000000, 15.000000)"));
    assert!(summary.contains("  2. B (49.100000, 15.000000)"));
    assert!(summary.contains("  3. Start: Depot"));
    assert_eq!(summary, PlanSummary(&plan).to_string());
}

#[test]
fn test_start_label_prefix_only_on_start() {
    let stop = Stop::new("Depot", 49.0, 15.0);

    assert_eq!(display_label(&stop, true), "Start: Depot");
    assert_eq!(display_label(&stop, false), "Depot");
}

#[test]
fn test_plan_debug_names_start_in_legs() {
    let stops = vec![
        Stop::new("Depot", 49.0, 15.0),
        Stop::new("B", 49.1, 15.0),
    ];
    let plan = RoutePlan::assemble(stops, &[1], &Config::new()).expect("plan");

    let debug = format!("{plan:?}");

    assert!(debug.contains("Leg 0: Start: Depot -> B"));
    assert!(debug.contains("Leg 1: B -> Start: Depot"));
}
