//! Ride registry — single owner of the ride and measurement tables.
//!
//! Both tables are fixed-size arrays sized by const generics and allocated
//! once at construction. A freshly built registry is already in the reset
//! state produced by [`RideRegistry::init_all`].

use tracing::{debug, trace};

use super::error::RideError;
use super::measurement::{MeasurementStatus, RideMeasurement, StatusByte};
use super::types::{Ride, RideIndex, RideType, raw_slot_type};
use crate::config::{CapacityConfig, ConfigError};
use crate::consts::{MAX_RIDE_MEASUREMENTS, MAX_RIDES, RIDE_INDEX_LIMIT};

/// Registry with the workspace default capacities.
pub type ParkRides = RideRegistry<MAX_RIDES, MAX_RIDE_MEASUREMENTS>;

// ─── AuxState ───────────────────────────────────────────────────────

/// Two engine state bytes cleared together with the ride table.
///
/// Their meaning is owned by the rest of the engine; the registry only
/// resets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuxState {
    /// First state byte.
    pub byte_0: i8,
    /// Second state byte.
    pub byte_1: i8,
}

impl AuxState {
    /// Zero both bytes.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ─── RideRegistry ───────────────────────────────────────────────────

/// Fixed-capacity ride table plus measurement table.
///
/// `RIDES` must be in `1..=255` so every index fits a `u8` below the
/// reserved `0xFF`; `MEASUREMENTS` must be non-zero. Both are checked when
/// the type is instantiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideRegistry<const RIDES: usize, const MEASUREMENTS: usize> {
    rides: [Option<Ride>; RIDES],
    measurements: [RideMeasurement; MEASUREMENTS],
    aux: AuxState,
}

impl<const RIDES: usize, const MEASUREMENTS: usize> Default for RideRegistry<RIDES, MEASUREMENTS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const RIDES: usize, const MEASUREMENTS: usize> RideRegistry<RIDES, MEASUREMENTS> {
    const CAPACITY_CHECK: () = assert!(
        RIDES > 0 && RIDES <= RIDE_INDEX_LIMIT && MEASUREMENTS > 0,
        "ride capacity must be 1..=255 and measurement capacity non-zero"
    );

    /// Create a registry in the reset state.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_CHECK;
        Self {
            rides: [None; RIDES],
            measurements: [RideMeasurement::default(); MEASUREMENTS],
            aux: AuxState::default(),
        }
    }

    /// Build a registry from raw tables.
    ///
    /// A ride type of `RIDE_TYPE_NULL` yields an empty slot and a status of
    /// `RIDE_MEASUREMENT_UNSET` an unset measurement; every other byte is
    /// kept as is. The auxiliary bytes start at zero.
    pub fn from_raw(ride_types: [u8; RIDES], measurement_statuses: [u8; MEASUREMENTS]) -> Self {
        let mut registry = Self::new();
        for (slot, raw) in registry.rides.iter_mut().zip(ride_types) {
            *slot = RideType::from_u8(raw).map(Ride::new);
        }
        for (m, raw) in registry.measurements.iter_mut().zip(measurement_statuses) {
            m.status = MeasurementStatus::from_u8(raw);
        }
        registry
    }

    /// Ride table capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        RIDES
    }

    /// Measurement table capacity.
    #[inline]
    pub const fn measurement_capacity(&self) -> usize {
        MEASUREMENTS
    }

    // ─── Core operations ────────────────────────────────────────────

    /// Number of occupied ride slots, in `0..=RIDES`.
    pub fn count(&self) -> usize {
        self.rides.iter().filter(|slot| slot.is_some()).count()
    }

    /// Reset every ride slot to empty, both auxiliary bytes to zero and
    /// every measurement slot to unset.
    pub fn init_all(&mut self) {
        self.rides.fill(None);
        self.aux.reset();
        self.measurements.iter_mut().for_each(RideMeasurement::reset);
        debug!(
            rides = RIDES,
            measurements = MEASUREMENTS,
            "ride tables reset"
        );
    }

    // ─── Ride slots ─────────────────────────────────────────────────

    /// Ride at `index`, if the slot is occupied.
    #[inline]
    pub fn get(&self, index: RideIndex) -> Option<&Ride> {
        self.rides.get(index.index()).and_then(Option::as_ref)
    }

    /// Mutable ride at `index`, if the slot is occupied.
    #[inline]
    pub fn get_mut(&mut self, index: RideIndex) -> Option<&mut Ride> {
        self.rides.get_mut(index.index()).and_then(Option::as_mut)
    }

    /// Occupy the slot at `index`.
    pub fn insert(&mut self, index: RideIndex, ride_type: RideType) -> Result<(), RideError> {
        let slot = self.slot_mut(index)?;
        if slot.is_some() {
            return Err(RideError::SlotOccupied(index.index()));
        }
        *slot = Some(Ride::new(ride_type));
        trace!(%index, %ride_type, "ride slot occupied");
        Ok(())
    }

    /// Occupy the lowest-index empty slot and return its index.
    pub fn allocate(&mut self, ride_type: RideType) -> Result<RideIndex, RideError> {
        let pos = self
            .rides
            .iter()
            .position(Option::is_none)
            .ok_or(RideError::TableFull(RIDES))?;
        self.rides[pos] = Some(Ride::new(ride_type));
        // RIDES <= RIDE_INDEX_LIMIT, so pos fits below 0xFF.
        let index = RideIndex(pos as u8);
        trace!(%index, %ride_type, "ride slot allocated");
        Ok(index)
    }

    /// Free the slot at `index`, returning the ride it held.
    pub fn remove(&mut self, index: RideIndex) -> Result<Ride, RideError> {
        let ride = self
            .slot_mut(index)?
            .take()
            .ok_or(RideError::SlotEmpty(index.index()))?;
        trace!(%index, "ride slot freed");
        Ok(ride)
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (RideIndex, &Ride)> + '_ {
        self.rides
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|ride| (RideIndex(i as u8), ride)))
    }

    /// Indices of occupied slots, without heap allocation.
    pub fn occupied_indices(&self) -> heapless::Vec<RideIndex, RIDES> {
        let mut indices = heapless::Vec::new();
        for (index, _) in self.iter() {
            let _ = indices.push(index);
        }
        indices
    }

    /// Raw type bytes, `RIDE_TYPE_NULL` for empty slots.
    pub fn raw_types(&self) -> [u8; RIDES] {
        core::array::from_fn(|i| raw_slot_type(self.rides[i].as_ref()))
    }

    fn slot_mut(&mut self, index: RideIndex) -> Result<&mut Option<Ride>, RideError> {
        self.rides
            .get_mut(index.index())
            .ok_or(RideError::IndexOutOfRange {
                index: index.index(),
                capacity: RIDES,
            })
    }

    // ─── Measurement slots ──────────────────────────────────────────

    /// Measurement slot at `slot`.
    #[inline]
    pub fn measurement(&self, slot: usize) -> Option<&RideMeasurement> {
        self.measurements.get(slot)
    }

    /// Overwrite the status byte of a measurement slot.
    ///
    /// The unset sentinel is rejected; use
    /// [`release_measurement`](Self::release_measurement) to clear a slot.
    pub fn set_measurement_status(&mut self, slot: usize, status: u8) -> Result<(), RideError> {
        let status = StatusByte::try_from(status)?;
        self.measurement_mut(slot)?.status = MeasurementStatus::Set(status);
        trace!(slot, status = status.as_u8(), "measurement status set");
        Ok(())
    }

    /// Mark the lowest unset measurement slot with `status` and return it.
    pub fn claim_measurement(&mut self, status: u8) -> Result<usize, RideError> {
        let status = MeasurementStatus::Set(StatusByte::try_from(status)?);
        let slot = self
            .measurements
            .iter()
            .position(|m| !m.is_set())
            .ok_or(RideError::MeasurementFull(MEASUREMENTS))?;
        self.measurements[slot].status = status;
        trace!(slot, "measurement slot claimed");
        Ok(slot)
    }

    /// Mark a measurement slot unset.
    pub fn release_measurement(&mut self, slot: usize) -> Result<(), RideError> {
        self.measurement_mut(slot)?.reset();
        trace!(slot, "measurement slot released");
        Ok(())
    }

    /// Number of measurement slots in use.
    pub fn active_measurements(&self) -> usize {
        self.measurements.iter().filter(|m| m.is_set()).count()
    }

    /// Raw status bytes, `RIDE_MEASUREMENT_UNSET` for unset slots.
    pub fn raw_measurement_statuses(&self) -> [u8; MEASUREMENTS] {
        core::array::from_fn(|i| self.measurements[i].status.as_u8())
    }

    fn measurement_mut(&mut self, slot: usize) -> Result<&mut RideMeasurement, RideError> {
        self.measurements
            .get_mut(slot)
            .ok_or(RideError::MeasurementOutOfRange {
                slot,
                capacity: MEASUREMENTS,
            })
    }

    // ─── Auxiliary state ────────────────────────────────────────────

    /// The two auxiliary state bytes.
    #[inline]
    pub fn aux_state(&self) -> &AuxState {
        &self.aux
    }

    /// Mutable access to the auxiliary state bytes.
    #[inline]
    pub fn aux_state_mut(&mut self) -> &mut AuxState {
        &mut self.aux
    }

    // ─── Startup validation ─────────────────────────────────────────

    /// Check declared capacities against the compiled ones.
    ///
    /// A mismatch is a fatal startup error.
    pub fn check_capacity(&self, declared: &CapacityConfig) -> Result<(), ConfigError> {
        if let Some(max_rides) = declared.max_rides {
            if max_rides != RIDES {
                return Err(ConfigError::ValidationError(format!(
                    "capacity.max_rides = {max_rides}, ride table holds {}",
                    RIDES
                )));
            }
        }
        if let Some(max_measurements) = declared.max_ride_measurements {
            if max_measurements != MEASUREMENTS {
                return Err(ConfigError::ValidationError(format!(
                    "capacity.max_ride_measurements = {max_measurements}, measurement table holds {}",
                    MEASUREMENTS
                )));
            }
        }
        Ok(())
    }
}
