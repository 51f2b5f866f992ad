//! Ride table error types.

use thiserror::Error;

/// Errors returned by slot management on the ride and measurement tables.
///
/// `count` and `init_all` never fail; only the operations that address a
/// specific slot or need a free one do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RideError {
    /// Ride index is outside the table.
    #[error("ride index {index} out of range (capacity {capacity})")]
    IndexOutOfRange { index: usize, capacity: usize },

    /// Slot already holds a ride.
    #[error("ride slot {0} is already occupied")]
    SlotOccupied(usize),

    /// Slot holds no ride.
    #[error("ride slot {0} is empty")]
    SlotEmpty(usize),

    /// No empty ride slot left.
    #[error("ride table full ({0} slots)")]
    TableFull(usize),

    /// Raw ride type is the empty-slot sentinel.
    #[error("ride type {0:#04x} is reserved for empty slots")]
    InvalidRideType(u8),

    /// Measurement slot is outside the table.
    #[error("measurement slot {slot} out of range (capacity {capacity})")]
    MeasurementOutOfRange { slot: usize, capacity: usize },

    /// No unset measurement slot left.
    #[error("measurement table full ({0} slots)")]
    MeasurementFull(usize),

    /// Raw status byte is the unset sentinel.
    #[error("measurement status {0:#04x} is reserved for unset slots")]
    InvalidMeasurementStatus(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_slot() {
        let err = RideError::IndexOutOfRange {
            index: 300,
            capacity: 255,
        };
        assert_eq!(err.to_string(), "ride index 300 out of range (capacity 255)");
        assert_eq!(
            RideError::InvalidRideType(0xFF).to_string(),
            "ride type 0xff is reserved for empty slots"
        );
    }
}
