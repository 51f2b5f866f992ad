//! Prelude module for common re-exports.
//!
//! ```rust
//! use park_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{
    CapacityConfig, ConfigError, ConfigLoader, ParkConfig, RideSeed, SharedConfig, load_config,
};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::consts::{MAX_RIDE_MEASUREMENTS, MAX_RIDES, RIDE_TYPE_NULL};

// ─── Rides ──────────────────────────────────────────────────────────
pub use crate::ride::{
    MeasurementStatus, ParkRides, Ride, RideError, RideIndex, RideRegistry, RideType, StatusByte,
};
