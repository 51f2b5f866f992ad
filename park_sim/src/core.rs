//! ParkCore struct and startup sequence.
//!
//! `ParkCore` owns the ride registry for the lifetime of the process. Startup
//! runs `check_capacity` → `reset` → `seed`; after that the ride count can be
//! queried at any time.

use park::config::{ParkConfig, RideSeed, load_config};
use park::ride::{ParkRides, RideIndex, RideType};
use std::path::Path;
use tracing::{debug, info};

use crate::error::ParkError;

/// Owner of the park's ride tables.
#[derive(Debug)]
pub struct ParkCore {
    /// Validated configuration.
    config: ParkConfig,
    /// Ride and measurement tables.
    rides: ParkRides,
}

impl ParkCore {
    /// Create a ParkCore from a configuration.
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or declares capacities
    /// that differ from the compiled ones.
    pub fn new(config: ParkConfig) -> Result<Self, ParkError> {
        config.validate()?;

        let rides = ParkRides::new();
        rides.check_capacity(&config.capacity)?;

        info!(
            service = %config.shared.service_name,
            max_rides = rides.capacity(),
            max_ride_measurements = rides.measurement_capacity(),
            "ParkCore created"
        );

        Ok(Self { config, rides })
    }

    /// Load and validate the configuration at `path`.
    ///
    /// # Errors
    /// Returns [`ParkError::Load`] naming the file on any load failure.
    pub fn load_config(path: &Path) -> Result<ParkConfig, ParkError> {
        let config = load_config(path).map_err(|source| ParkError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// Run the startup sequence: reset all tables, then place the
    /// configured rides.
    pub fn start(&mut self) -> Result<(), ParkError> {
        self.reset();
        self.seed()?;
        info!(rides = self.ride_count(), "Park started");
        Ok(())
    }

    /// Reset the ride and measurement tables.
    pub fn reset(&mut self) {
        self.rides.init_all();
        info!("Ride tables reset");
    }

    /// Place every configured ride.
    ///
    /// Seeds with an explicit index go first so that index-less seeds cannot
    /// take a slot reserved by a later entry.
    pub fn seed(&mut self) -> Result<(), ParkError> {
        let seeds = &self.config.rides;
        let (fixed, floating): (Vec<_>, Vec<_>) =
            seeds.iter().enumerate().partition(|(_, s)| s.index.is_some());

        for (pos, seed) in fixed.into_iter().chain(floating) {
            place(&mut self.rides, seed).map_err(|source| ParkError::Seed { seed: pos, source })?;
        }
        Ok(())
    }

    /// Number of rides in the park.
    pub fn ride_count(&self) -> usize {
        self.rides.count()
    }

    /// Read access to the ride tables.
    pub fn rides(&self) -> &ParkRides {
        &self.rides
    }

    /// Loaded configuration.
    pub fn config(&self) -> &ParkConfig {
        &self.config
    }
}

fn place(rides: &mut ParkRides, seed: &RideSeed) -> Result<RideIndex, park::ride::RideError> {
    let ride_type = RideType::try_from(seed.ride_type)?;
    let index = match seed.index {
        Some(raw) => {
            let index = RideIndex(raw);
            rides.insert(index, ride_type)?;
            index
        }
        None => rides.allocate(ride_type)?,
    };
    debug!(%index, %ride_type, "Seeded ride");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use park::config::{CapacityConfig, LogLevel, SharedConfig};
    use park::ride::RideError;

    fn config(rides: Vec<RideSeed>) -> ParkConfig {
        ParkConfig {
            shared: SharedConfig {
                log_level: LogLevel::Info,
                service_name: "park-test".to_string(),
            },
            capacity: CapacityConfig::default(),
            rides,
        }
    }

    #[test]
    fn start_without_seeds_leaves_park_empty() {
        let mut core = ParkCore::new(config(Vec::new())).unwrap();
        core.start().unwrap();
        assert_eq!(core.ride_count(), 0);
    }

    #[test]
    fn fixed_seeds_are_placed_before_floating_ones() {
        let mut core = ParkCore::new(config(vec![
            RideSeed {
                index: None,
                ride_type: 1,
            },
            RideSeed {
                index: Some(0),
                ride_type: 2,
            },
        ]))
        .unwrap();
        core.start().unwrap();

        assert_eq!(core.ride_count(), 2);
        assert_eq!(core.rides().get(RideIndex(0)).unwrap().ride_type.as_u8(), 2);
        assert_eq!(core.rides().get(RideIndex(1)).unwrap().ride_type.as_u8(), 1);
    }

    #[test]
    fn seed_out_of_range_reports_position() {
        let mut core = ParkCore::new(config(vec![RideSeed {
            index: Some(255),
            ride_type: 1,
        }]))
        .unwrap();

        let err = core.start().unwrap_err();
        assert!(matches!(
            err,
            ParkError::Seed {
                seed: 0,
                source: RideError::IndexOutOfRange { index: 255, .. }
            }
        ));
    }

    #[test]
    fn capacity_mismatch_is_fatal() {
        let mut cfg = config(Vec::new());
        cfg.capacity.max_ride_measurements = Some(4);
        assert!(matches!(ParkCore::new(cfg), Err(ParkError::Config(_))));
    }

    #[test]
    fn config_accessor_returns_loaded_config() {
        let core = ParkCore::new(config(Vec::new())).unwrap();
        assert_eq!(core.config().shared.service_name, "park-test");
    }

    #[test]
    fn load_failure_names_the_file() {
        let err = ParkCore::load_config(Path::new("/nonexistent/park.toml")).unwrap_err();
        assert!(matches!(
            &err,
            ParkError::Load {
                source: park::config::ConfigError::FileNotFound,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "/nonexistent/park.toml: Configuration file not found"
        );
    }

    #[test]
    fn restart_resets_previous_rides() {
        let mut core = ParkCore::new(config(vec![RideSeed {
            index: Some(3),
            ride_type: 9,
        }]))
        .unwrap();
        core.start().unwrap();
        core.start().unwrap();
        assert_eq!(core.ride_count(), 1);

        core.reset();
        assert_eq!(core.ride_count(), 0);
    }
}
