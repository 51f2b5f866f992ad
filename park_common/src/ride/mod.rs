//! Ride table — fixed-capacity ride slots plus ride measurement slots.
//!
//! [`RideRegistry`] owns both tables and the two auxiliary state bytes.
//! Occupancy is `Option<Ride>`; the raw `0xFF` sentinels only appear in
//! the `from_raw` / `raw_*` conversions.

pub mod error;
pub mod measurement;
pub mod registry;
pub mod types;

pub use error::RideError;
pub use measurement::{MeasurementStatus, RideMeasurement, StatusByte};
pub use registry::{AuxState, ParkRides, RideRegistry};
pub use types::{Ride, RideIndex, RideType};
