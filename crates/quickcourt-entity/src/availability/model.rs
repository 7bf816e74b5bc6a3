//! Availability entity models.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use quickcourt_core::types::id::VenueId;
use quickcourt_core::types::slot::SlotLabel;

/// A stored availability row for one venue, date, and slot.
///
/// Rows are only materialized once a slot has been claimed; a slot with
/// no row is free.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AvailabilityRecord {
    /// Row identifier.
    pub id: Uuid,
    /// The venue.
    pub venue_id: VenueId,
    /// The calendar date.
    pub date: NaiveDate,
    /// The slot label.
    pub time_slot: SlotLabel,
    /// Whether the slot is currently free.
    pub is_available: bool,
    /// When the row was first materialized.
    pub created_at: DateTime<Utc>,
}

/// Availability state of a single slot as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    /// The slot can be booked.
    Free,
    /// The slot is held by a confirmed booking.
    Taken,
}

/// The full day's availability for one venue and date.
///
/// Contains an entry for every slot of the daily schedule, with slots
/// lacking a stored record defaulting to [`SlotState::Free`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAvailability {
    /// The venue.
    pub venue_id: VenueId,
    /// The calendar date.
    pub date: NaiveDate,
    /// Per-slot state, in chronological order.
    pub slots: BTreeMap<SlotLabel, SlotState>,
}

impl DayAvailability {
    /// Whether the given slot is free. Slots outside the schedule are
    /// reported as not free.
    pub fn is_free(&self, slot: SlotLabel) -> bool {
        matches!(self.slots.get(&slot), Some(SlotState::Free))
    }

    /// All free slots in chronological order.
    pub fn free_slots(&self) -> Vec<SlotLabel> {
        self.slots
            .iter()
            .filter(|(_, state)| **state == SlotState::Free)
            .map(|(slot, _)| *slot)
            .collect()
    }
}
