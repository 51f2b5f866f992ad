//! Ride measurement slots.
//!
//! The measurement table is indexed independently of the ride table. Its raw
//! status byte uses [`RIDE_MEASUREMENT_UNSET`] for "unset"; any other value
//! is carried through untouched.

use serde::{Deserialize, Serialize};

use super::error::RideError;
use crate::consts::RIDE_MEASUREMENT_UNSET;

// ─── StatusByte ─────────────────────────────────────────────────────

/// Status byte of an in-use measurement slot. Never [`RIDE_MEASUREMENT_UNSET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(transparent)]
pub struct StatusByte(u8);

impl StatusByte {
    /// Convert from raw `u8`. Returns `None` for the unset sentinel.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        if value == RIDE_MEASUREMENT_UNSET {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Raw status byte.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for StatusByte {
    type Error = RideError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(RideError::InvalidMeasurementStatus(value))
    }
}

impl From<StatusByte> for u8 {
    #[inline]
    fn from(status: StatusByte) -> u8 {
        status.0
    }
}

// ─── MeasurementStatus ──────────────────────────────────────────────

/// Status of a measurement slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MeasurementStatus {
    /// Slot not in use.
    #[default]
    Unset,
    /// Slot in use.
    Set(StatusByte),
}

impl MeasurementStatus {
    /// Convert from the raw status byte.
    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        match StatusByte::from_u8(value) {
            Some(status) => Self::Set(status),
            None => Self::Unset,
        }
    }

    /// Raw status byte.
    #[inline]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Unset => RIDE_MEASUREMENT_UNSET,
            Self::Set(status) => status.as_u8(),
        }
    }
}

/// One slot of the measurement table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RideMeasurement {
    /// Slot status.
    pub status: MeasurementStatus,
}

impl RideMeasurement {
    /// True when the slot is in use.
    #[inline]
    pub const fn is_set(&self) -> bool {
        matches!(self.status, MeasurementStatus::Set(_))
    }

    /// Mark the slot unset.
    #[inline]
    pub fn reset(&mut self) {
        self.status = MeasurementStatus::Unset;
    }
}
