//! Unit tests for configuration handling.

use std::io::Write;

use route_sequencer::config::Config;

#[test]
fn test_defaults() {
    let config = Config::default();

    assert!(config.round_trip);
    assert_eq!(config.avg_speed_kmh, 60.0);
    assert_eq!(config.service_minutes_per_stop, 20.0);
    assert_eq!(config.fuel_consumption_per_100km, 10.0);
    assert_eq!(config.fuel_price_per_unit, 32.0);
    assert!(config.allow_online_geocoding);
    assert_eq!(Config::new(), config);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config: Config =
        serde_json::from_str(r#"{"round_trip": false, "avg_speed_kmh": 45.0}"#).expect("config");

    assert!(!config.round_trip);
    assert_eq!(config.avg_speed_kmh, 45.0);
    assert_eq!(config.fuel_price_per_unit, 32.0);
}

#[test]
fn test_from_json_file() {
    let path = std::env::temp_dir().join(format!("route-config-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).expect("temp file");
    write!(file, r#"{{"allow_online_geocoding": false, "fuel_price_per_unit": 1.9}}"#)
        .expect("write");
    drop(file);

    let config = Config::from_json_file(&path).expect("should load");
    std::fs::remove_file(&path).ok();

    assert_eq!(
        config,
        Config::new()
            .with_online_geocoding(false)
            .with_fuel_price_per_unit(1.9)
    );
}

#[test]
fn test_from_json_file_rejects_bad_json() {
    let path = std::env::temp_dir().join(format!("route-config-bad-{}.json", std::process::id()));
    std::fs::write(&path, "{ not json").expect("write");

    let err = Config::from_json_file(&path).expect_err("should fail");
    std::fs::remove_file(&path).ok();

    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}
