//! Ride record types.
//!
//! The raw table marks an empty slot by writing [`RIDE_TYPE_NULL`] into the
//! type field. Here a slot is `Option<Ride>` and [`RideType`] cannot hold
//! the sentinel, so the raw value only shows up in the `u8` conversions.

use std::fmt;

use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;

use super::error::RideError;
use crate::consts::{RIDE_INDEX_LIMIT, RIDE_TYPE_NULL};

// ─── RideType ───────────────────────────────────────────────────────

/// Ride type identifier, `0..=254`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(transparent)]
pub struct RideType(u8);

const_assert_eq!(core::mem::size_of::<RideType>(), 1);

impl RideType {
    /// Convert from raw `u8`. Returns `None` for [`RIDE_TYPE_NULL`].
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        if value == RIDE_TYPE_NULL {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Raw type byte.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for RideType {
    type Error = RideError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(RideError::InvalidRideType(value))
    }
}

impl From<RideType> for u8 {
    #[inline]
    fn from(ride_type: RideType) -> u8 {
        ride_type.0
    }
}

impl fmt::Display for RideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── RideIndex ──────────────────────────────────────────────────────

/// Position of a ride in the ride table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct RideIndex(pub u8);

impl RideIndex {
    /// Cast to `usize` for array indexing.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for RideIndex {
    type Error = RideError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < RIDE_INDEX_LIMIT {
            Ok(Self(index as u8))
        } else {
            Err(RideError::IndexOutOfRange {
                index,
                capacity: RIDE_INDEX_LIMIT,
            })
        }
    }
}

impl From<RideIndex> for usize {
    #[inline(always)]
    fn from(index: RideIndex) -> usize {
        index.index()
    }
}

impl fmt::Display for RideIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ride #{}", self.0)
    }
}

// ─── Ride ───────────────────────────────────────────────────────────

/// An occupied ride slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ride {
    /// Ride type.
    pub ride_type: RideType,
}

impl Ride {
    /// Create a ride of the given type.
    #[inline]
    pub const fn new(ride_type: RideType) -> Self {
        Self { ride_type }
    }
}

/// Raw type byte of a slot: the ride's type, or [`RIDE_TYPE_NULL`] if empty.
#[inline]
pub fn raw_slot_type(slot: Option<&Ride>) -> u8 {
    slot.map_or(RIDE_TYPE_NULL, |ride| ride.ride_type.as_u8())
}
