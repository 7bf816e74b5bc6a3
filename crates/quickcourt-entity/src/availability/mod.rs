//! Availability domain entities.

pub mod model;

pub use model::{AvailabilityRecord, DayAvailability, SlotState};
