//! Park Common Library
//!
//! Ride table registry, shared constants and configuration loading for all
//! park workspace crates.
//!
//! # Module Structure
//!
//! - [`consts`] - Table capacities, raw sentinels, default paths
//! - [`ride`] - Ride and measurement tables
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! Add to your `Cargo.toml` with alias for shorter imports:
//! ```toml
//! [dependencies]
//! park = { package = "park_common", path = "../park_common" }
//! ```
//!
//! Then:
//! ```rust
//! use park_common::ride::{ParkRides, RideType};
//!
//! let mut rides = ParkRides::new();
//! rides.allocate(RideType::from_u8(5).unwrap()).unwrap();
//! assert_eq!(rides.count(), 1);
//!
//! rides.init_all();
//! assert_eq!(rides.count(), 0);
//! ```

pub mod config;
pub mod consts;
pub mod prelude;
pub mod ride;
