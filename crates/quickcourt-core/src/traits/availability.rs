//! Availability store trait for atomic slot claims.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::result::AppResult;
use crate::types::id::VenueId;
use crate::types::slot::SlotLabel;

/// A single slot's stored availability for one venue and date.
///
/// Slots without a stored record are free; the store only materializes
/// rows once a slot has been claimed at least once.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct SlotRecord {
    /// The slot label.
    pub slot: SlotLabel,
    /// Whether the slot is currently free.
    pub is_free: bool,
}

/// Result of an atomic multi-slot claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// Every requested slot was free and is now held by the caller.
    Claimed,
    /// At least one requested slot was already taken; nothing was claimed.
    Conflict {
        /// The contested slot labels, sorted chronologically.
        slots: Vec<SlotLabel>,
    },
}

/// Trait for atomic slot claims against the availability store.
///
/// Implementations must guarantee atomicity: a multi-slot claim either
/// takes every requested slot or takes none, and of two concurrent claims
/// over an overlapping slot set exactly one observes [`ClaimOutcome::Claimed`]
/// while the other observes a conflict naming the overlap. Read-then-write
/// sequences are not acceptable implementations of [`claim`].
///
/// Two implementations are provided:
/// - PostgreSQL (a single conditional statement inside a transaction)
/// - In-memory (using `tokio::sync::Mutex`)
///
/// [`claim`]: AvailabilityStore::claim
#[async_trait]
pub trait AvailabilityStore: Send + Sync + 'static {
    /// Read all stored slot records for the venue and date.
    ///
    /// Pure read with no freshness guarantee; the result may be stale by
    /// the time a claim is attempted.
    async fn slot_records(&self, venue_id: VenueId, date: NaiveDate)
    -> AppResult<Vec<SlotRecord>>;

    /// Atomically claim every slot in `slots`, or none of them.
    ///
    /// A slot is claimed only if it is currently free. On conflict the
    /// returned labels are exactly the requested slots that were taken.
    /// Callers pass deduplicated labels.
    async fn claim(
        &self,
        venue_id: VenueId,
        date: NaiveDate,
        slots: &[SlotLabel],
    ) -> AppResult<ClaimOutcome>;

    /// Return previously claimed slots to the free state.
    ///
    /// Used by cancellation and by rollback after a failed commit.
    /// Releasing a slot that is already free is a no-op.
    async fn release(
        &self,
        venue_id: VenueId,
        date: NaiveDate,
        slots: &[SlotLabel],
    ) -> AppResult<()>;
}
