//! Configuration loading traits and types.
//!
//! This module provides a standardized way to load TOML configuration files
//! across all park applications.
//!
//! # Usage
//!
//! ```rust,no_run
//! use park_common::config::{ConfigError, load_config};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = load_config(Path::new("park.toml"))?;
//!     println!("Service: {}", config.shared.service_name);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::consts::RIDE_TYPE_NULL;

/// Error type for configuration loading operations.
///
/// This enum represents all possible errors that can occur when loading
/// configuration files.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// TOML parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Log level for application logging.
///
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose, detailed tracing information.
    Trace,
    /// Debug information useful during development.
    Debug,
    /// General information about application operation.
    #[default]
    Info,
    /// Warning messages for potentially problematic situations.
    Warn,
    /// Error messages for serious problems.
    Error,
}

impl LogLevel {
    /// Directive string understood by `tracing_subscriber::EnvFilter`.
    pub const fn as_directive(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Common configuration fields shared across all park applications.
///
/// # TOML Example
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "park-sim-01"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Logging verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Application instance identifier.
    pub service_name: String,
}

impl SharedConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if `service_name` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "service_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Declared table capacities.
///
/// Both fields are optional. When present they must match the capacities
/// the binary was compiled with; see
/// [`RideRegistry::check_capacity`](crate::ride::RideRegistry::check_capacity).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapacityConfig {
    /// Expected ride table capacity.
    #[serde(default)]
    pub max_rides: Option<usize>,
    /// Expected measurement table capacity.
    #[serde(default)]
    pub max_ride_measurements: Option<usize>,
}

/// A ride placed into the table right after reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RideSeed {
    /// Target slot. `None` takes the first empty slot.
    #[serde(default)]
    pub index: Option<u8>,
    /// Raw ride type, `0..=254`.
    pub ride_type: u8,
}

/// Top-level `park.toml`.
///
/// ```toml
/// [shared]
/// service_name = "park-sim"
///
/// [capacity]
/// max_rides = 255
///
/// [[rides]]
/// index = 3
/// ride_type = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkConfig {
    /// Common fields.
    pub shared: SharedConfig,

    /// Declared capacities, checked at startup.
    #[serde(default)]
    pub capacity: CapacityConfig,

    /// Initial rides.
    #[serde(default)]
    pub rides: Vec<RideSeed>,
}

impl ParkConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - the shared section is invalid
    /// - a declared capacity is zero
    /// - a seed uses the empty-slot ride type
    /// - two seeds target the same index
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;

        if self.capacity.max_rides == Some(0) {
            return Err(ConfigError::ValidationError(
                "capacity.max_rides must be > 0".to_string(),
            ));
        }
        if self.capacity.max_ride_measurements == Some(0) {
            return Err(ConfigError::ValidationError(
                "capacity.max_ride_measurements must be > 0".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for (i, seed) in self.rides.iter().enumerate() {
            if seed.ride_type == RIDE_TYPE_NULL {
                return Err(ConfigError::ValidationError(format!(
                    "rides[{i}]: ride_type {RIDE_TYPE_NULL:#04x} is reserved for empty slots"
                )));
            }
            if let Some(index) = seed.index {
                if !seen.insert(index) {
                    return Err(ConfigError::ValidationError(format!(
                        "rides[{i}]: index {index} assigned more than once"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Trait for loading configuration from TOML files.
///
/// This trait provides a default implementation that works with any type
/// implementing `serde::de::DeserializeOwned`.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

// Blanket implementation for all types that implement DeserializeOwned.
impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}

/// Load and validate `park.toml`.
pub fn load_config(path: &Path) -> Result<ParkConfig, ConfigError> {
    let config = ParkConfig::load(path)?;
    config.validate()?;
    Ok(config)
}
