//! PostgreSQL availability store.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::{debug, info};

use quickcourt_core::error::AppError;
use quickcourt_core::result::AppResult;
use quickcourt_core::traits::availability::{AvailabilityStore, ClaimOutcome, SlotRecord};
use quickcourt_core::types::id::VenueId;
use quickcourt_core::types::slot::SlotLabel;
use quickcourt_entity::availability::model::AvailabilityRecord;

/// Availability store backed by the `venue_availability` table.
///
/// The claim path is a single conditional statement: each requested slot
/// row is inserted as taken, or flipped to taken only if it is still
/// free. Rows that fail the condition are absent from the statement's
/// RETURNING set, which makes a partial claim detectable inside the same
/// transaction so it can be rolled back before anyone observes it.
#[derive(Debug, Clone)]
pub struct PgAvailabilityStore {
    pool: PgPool,
}

impl PgAvailabilityStore {
    /// Create a new availability store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityStore for PgAvailabilityStore {
    async fn slot_records(
        &self,
        venue_id: VenueId,
        date: NaiveDate,
    ) -> AppResult<Vec<SlotRecord>> {
        let rows = sqlx::query_as::<_, AvailabilityRecord>(
            "SELECT * FROM venue_availability \
             WHERE venue_id = $1 AND date = $2 ORDER BY time_slot",
        )
        .bind(venue_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::persistence_with_source("failed to read slot records", e))?;

        Ok(rows
            .into_iter()
            .map(|record| SlotRecord {
                slot: record.time_slot,
                is_free: record.is_available,
            })
            .collect())
    }

    async fn claim(
        &self,
        venue_id: VenueId,
        date: NaiveDate,
        slots: &[SlotLabel],
    ) -> AppResult<ClaimOutcome> {
        let requested: Vec<String> = slots.iter().map(ToString::to_string).collect();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::persistence_with_source("failed to begin claim", e))?;

        // Insert each slot as taken, or flip an existing row to taken
        // only while it is still free. Slots that lose the condition are
        // missing from the RETURNING set.
        let claimed: Vec<SlotLabel> = sqlx::query_scalar(
            "INSERT INTO venue_availability (venue_id, date, time_slot, is_available) \
             SELECT $1, $2, slot, FALSE FROM unnest($3::text[]) AS slot \
             ON CONFLICT (venue_id, date, time_slot) \
             DO UPDATE SET is_available = FALSE \
             WHERE venue_availability.is_available = TRUE \
             RETURNING time_slot",
        )
        .bind(venue_id)
        .bind(date)
        .bind(&requested)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| AppError::persistence_with_source("failed to claim slots", e))?;

        if claimed.len() < slots.len() {
            tx.rollback()
                .await
                .map_err(|e| AppError::persistence_with_source("failed to roll back claim", e))?;

            let mut conflicting: Vec<SlotLabel> = slots
                .iter()
                .filter(|slot| !claimed.contains(slot))
                .copied()
                .collect();
            conflicting.sort_unstable();

            info!(
                venue_id = %venue_id,
                date = %date,
                conflicting = ?conflicting.iter().map(ToString::to_string).collect::<Vec<_>>(),
                "Slot claim lost to an existing booking"
            );
            return Ok(ClaimOutcome::Conflict { slots: conflicting });
        }

        tx.commit()
            .await
            .map_err(|e| AppError::persistence_with_source("failed to commit claim", e))?;

        debug!(
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
        let labels: Vec<String> = slots.iter().map(ToString::to_string).collect();

        let result = sqlx::query(
            "UPDATE venue_availability SET is_available = TRUE \
             WHERE venue_id = $1 AND date = $2 AND time_slot = ANY($3)",
        )
        .bind(venue_id)
        .bind(date)
        .bind(&labels)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::persistence_with_source("failed to release slots", e))?;

        info!(
            venue_id = %venue_id,
            date = %date,
            released = result.rows_affected(),
            "Slots released"
        );
        Ok(())
    }
}
