//! In-memory availability store using a Tokio mutex.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::{info, warn};

use quickcourt_core::result::AppResult;
use quickcourt_core::traits::availability::{AvailabilityStore, ClaimOutcome, SlotRecord};
use quickcourt_core::types::id::VenueId;
use quickcourt_core::types::slot::{SlotKey, SlotLabel};

/// In-memory availability store.
///
/// Holds the set of taken slot keys behind a Tokio mutex; a multi-slot
/// claim checks and inserts under a single guard, which gives the same
/// all-or-nothing behavior as the database implementation. Suitable for
/// single-node deployments only.
#[derive(Debug, Clone, Default)]
pub struct MemoryAvailabilityStore {
    /// Slot keys currently held by a booking. Absent keys are free.
    taken: Arc<Mutex<HashSet<SlotKey>>>,
}

impl MemoryAvailabilityStore {
    /// Create an empty store: every slot of every venue starts free.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AvailabilityStore for MemoryAvailabilityStore {
    async fn slot_records(
        &self,
        venue_id: VenueId,
        date: NaiveDate,
    ) -> AppResult<Vec<SlotRecord>> {
        let taken = self.taken.lock().await;

        let mut records: Vec<SlotRecord> = taken
            .iter()
            .filter(|key| key.venue_id == venue_id && key.date == date)
            .map(|key| SlotRecord {
                slot: key.slot,
                is_free: false,
            })
            .collect();
        records.sort_unstable_by_key(|record| record.slot);

        Ok(records)
    }

    async fn claim(
        &self,
        venue_id: VenueId,
        date: NaiveDate,
        slots: &[SlotLabel],
    ) -> AppResult<ClaimOutcome> {
        let mut taken = self.taken.lock().await;

        let mut conflicting: Vec<SlotLabel> = slots
            .iter()
            .filter(|slot| taken.contains(&SlotKey::new(venue_id, date, **slot)))
            .copied()
            .collect();

        if !conflicting.is_empty() {
            conflicting.sort_unstable();
            info!(
                venue_id = %venue_id,
                date = %date,
                conflicting = ?conflicting.iter().map(ToString::to_string).collect::<Vec<_>>(),
                "Slot claim lost to an existing booking"
            );
            return Ok(ClaimOutcome::Conflict { slots: conflicting });
        }

        for slot in slots {
            taken.insert(SlotKey::new(venue_id, date, *slot));
        }
        info!(
            venue_id = %venue_id,
            date = %date,
            slots = slots.len(),
            "Slots claimed"
        );
        Ok(ClaimOutcome::Claimed)
    }

    async fn release(
        &self,
        venue_id: VenueId,
        date: NaiveDate,
        slots: &[SlotLabel],
    ) -> AppResult<()> {
        let mut taken = self.taken.lock().await;

        for slot in slots {
            if !taken.remove(&SlotKey::new(venue_id, date, *slot)) {
                warn!(
                    venue_id = %venue_id,
                    date = %date,
                    slot = %slot,
                    "Attempted to release a slot that was not taken"
                );
            }
        }
        Ok(())
    }
}
