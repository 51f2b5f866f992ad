//! Workspace-wide constants for the park simulation.
//!
//! Single source of truth for table capacities, raw sentinels and default
//! paths. Imported by all crates — no duplication permitted.

use static_assertions::const_assert;

/// Capacity of the ride table.
pub const MAX_RIDES: usize = 255;

/// Capacity of the ride measurement table.
pub const MAX_RIDE_MEASUREMENTS: usize = 8;

/// Raw ride type marking an unoccupied ride slot.
pub const RIDE_TYPE_NULL: u8 = 0xFF;

/// Raw measurement status marking an unset measurement slot.
pub const RIDE_MEASUREMENT_UNSET: u8 = 0xFF;

/// Upper bound (exclusive) on any ride table capacity.
///
/// Ride indices are stored as `u8`; `0xFF` stays reserved as "no ride".
pub const RIDE_INDEX_LIMIT: usize = u8::MAX as usize;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/park/park.toml";

const_assert!(MAX_RIDES > 0);
const_assert!(MAX_RIDES <= RIDE_INDEX_LIMIT);
const_assert!(MAX_RIDE_MEASUREMENTS > 0);
