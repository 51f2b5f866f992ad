//! # Park Simulation Bootstrap
//!
//! Brings the ride tables of a park simulation into a known state: loads
//! `park.toml`, checks the declared capacities against the compiled ones,
//! resets the tables and places the configured initial rides.
//!
//! # Module Structure
//!
//! - [`core`] - ParkCore struct, startup sequence
//! - [`error`] - Startup error type

#![deny(warnings)]
#![deny(missing_docs)]

pub mod core;
pub mod error;
