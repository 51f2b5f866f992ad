//! Startup integration tests.
//!
//! Loads `park.toml` files from disk and runs the full startup sequence:
//! capacity check, reset, seeding.

use park::config::{ConfigError, LogLevel, load_config};
use park::consts::{MAX_RIDES, RIDE_TYPE_NULL};
use park::ride::RideIndex;
use park_sim::core::ParkCore;
use park_sim::error::ParkError;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("park.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn full_startup_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[shared]
log_level = "debug"
service_name = "park-sim-01"

[capacity]
max_rides = 255
max_ride_measurements = 8

[[rides]]
index = 3
ride_type = 5

[[rides]]
ride_type = 2

[[rides]]
ride_type = 7
"#,
    );

    let config = load_config(&path).unwrap();
    assert_eq!(config.shared.log_level, LogLevel::Debug);

    let mut core = ParkCore::new(config).unwrap();
    core.start().unwrap();

    assert_eq!(core.ride_count(), 3);
    let raw = core.rides().raw_types();
    assert_eq!(&raw[..4], &[2, 7, RIDE_TYPE_NULL, 5]);
    assert!(raw[4..].iter().all(|&t| t == RIDE_TYPE_NULL));
    assert_eq!(core.rides().active_measurements(), 0);
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let result = load_config(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound)));
}

#[test]
fn declared_capacity_mismatch_stops_startup() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[shared]
service_name = "park"

[capacity]
max_rides = 4
"#,
    );

    let config = load_config(&path).unwrap();
    let err = ParkCore::new(config).unwrap_err();
    assert!(matches!(
        err,
        ParkError::Config(ConfigError::ValidationError(msg)) if msg.contains("max_rides")
    ));
}

#[test]
fn seeding_more_rides_than_capacity_fails() {
    let dir = TempDir::new().unwrap();
    let mut content = String::from("[shared]\nservice_name = \"park\"\n");
    for _ in 0..=MAX_RIDES {
        content.push_str("\n[[rides]]\nride_type = 1\n");
    }
    let path = write_config(&dir, &content);

    let mut core = ParkCore::new(load_config(&path).unwrap()).unwrap();
    let err = core.start().unwrap_err();
    assert!(matches!(err, ParkError::Seed { seed, .. } if seed == MAX_RIDES));
    assert_eq!(core.ride_count(), MAX_RIDES);
}

#[test]
fn empty_service_name_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[shared]\nservice_name = \"\"\n");
    assert!(matches!(
        load_config(&path),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn reset_clears_seeded_rides() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[shared]\nservice_name = \"park\"\n\n[[rides]]\nindex = 0\nride_type = 3\n",
    );
    let mut core = ParkCore::new(load_config(&path).unwrap()).unwrap();
    core.start().unwrap();
    assert!(core.rides().get(RideIndex(0)).is_some());

    core.reset();
    assert_eq!(core.ride_count(), 0);
}
