//! The reservation coordinator.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use quickcourt_core::config::booking::BookingConfig;
use quickcourt_core::error::AppError;
use quickcourt_core::result::AppResult;
use quickcourt_core::traits::availability::{AvailabilityStore, ClaimOutcome};
use quickcourt_core::traits::payment::{ChargeOutcome, ChargeRequest, PaymentGateway};
use quickcourt_core::types::id::{BookingId, VenueId};
use quickcourt_core::types::slot::{DaySchedule, SlotLabel};
use quickcourt_entity::availability::model::{DayAvailability, SlotState};
use quickcourt_entity::booking::model::{Booking, ContactDetails, CreateBooking};
use quickcourt_entity::booking::status::{BookingStatus, PaymentStatus};
use quickcourt_entity::booking::store::BookingStore;
use quickcourt_entity::venue::catalog::VenueCatalog;

use crate::context::RequestContext;

use super::pricing;

/// A reservation request as it arrives from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveRequest {
    /// The venue to book.
    pub venue_id: VenueId,
    /// The calendar date to book.
    pub date: NaiveDate,
    /// The requested slot labels. Any non-empty subset of the daily
    /// schedule is allowed; contiguity is not required.
    pub slots: Vec<SlotLabel>,
    /// The sport to play; must be offered by the venue.
    pub sport: String,
    /// Number of players, at least 1.
    pub player_count: u32,
    /// Contact details captured with the booking.
    #[serde(default)]
    pub contact: ContactDetails,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// Coordinates slot reservation across the venue catalog, availability
/// store, booking store, and payment gateway.
///
/// Holds no long-lived state of its own: each operation is a short
/// request-response call, and any number of them may run concurrently.
/// Slot exclusivity rests entirely on the availability store's atomic
/// claim, never on coordinator-side bookkeeping.
#[derive(Clone)]
pub struct ReservationService {
    /// Venue catalog (read-only).
    venues: Arc<dyn VenueCatalog>,
    /// Availability store.
    availability: Arc<dyn AvailabilityStore>,
    /// Booking store.
    bookings: Arc<dyn BookingStore>,
    /// Payment gateway.
    payments: Arc<dyn PaymentGateway>,
    /// The bookable daily schedule.
    schedule: DaySchedule,
    /// Platform fee percentage.
    platform_fee_percent: u32,
    /// Timeout for every availability-store call.
    store_timeout: Duration,
}

impl ReservationService {
    /// Creates a new reservation service.
    pub fn new(
        venues: Arc<dyn VenueCatalog>,
        availability: Arc<dyn AvailabilityStore>,
        bookings: Arc<dyn BookingStore>,
        payments: Arc<dyn PaymentGateway>,
        config: &BookingConfig,
    ) -> AppResult<Self> {
        Ok(Self {
            venues,
            availability,
            bookings,
            payments,
            schedule: config.schedule()?,
            platform_fee_percent: config.platform_fee_percent,
            store_timeout: Duration::from_secs(config.store_timeout_seconds),
        })
    }

    /// The bookable daily schedule.
    pub fn schedule(&self) -> DaySchedule {
        self.schedule
    }

    /// Report the availability of every schedule slot for one venue and
    /// date.
    ///
    /// Pure read: slots without a stored record are free. The result
    /// carries no freshness guarantee — a subsequent [`reserve`] may
    /// still lose slots that were free at read time.
    ///
    /// [`reserve`]: ReservationService::reserve
    pub async fn check_availability(
        &self,
        venue_id: VenueId,
        date: NaiveDate,
    ) -> AppResult<DayAvailability> {
        reject_past_date(date)?;

        self.venues
            .find_by_id(venue_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("venue {venue_id} not found")))?;

        let records = self
            .store_call("slot records", self.availability.slot_records(venue_id, date))
            .await?;

        let mut slots: BTreeMap<SlotLabel, SlotState> = self
            .schedule
            .slots()
            .into_iter()
            .map(|slot| (slot, SlotState::Free))
            .collect();
        for record in records {
            if self.schedule.contains(record.slot) && !record.is_free {
                slots.insert(record.slot, SlotState::Taken);
            }
        }

        Ok(DayAvailability {
            venue_id,
            date,
            slots,
        })
    }

    /// Reserve a set of slots for the acting user.
    ///
    /// Validation happens before any mutation; the claim itself is a
    /// single atomic conditional operation, so of two concurrent
    /// overlapping requests exactly one succeeds and the other receives
    /// a [`AppError::SlotConflict`] naming the overlap. Payment or
    /// persistence failures after the claim release every claimed slot
    /// before the error is surfaced.
    pub async fn reserve(
        &self,
        ctx: &RequestContext,
        request: ReserveRequest,
    ) -> AppResult<Booking> {
        let slots = self.validate_slots(&request.slots)?;
        if request.player_count < 1 {
            return Err(AppError::validation("player count must be at least 1"));
        }
        reject_past_date(request.date)?;

        let venue = self
            .venues
            .find_by_id(request.venue_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("venue {} not found", request.venue_id)))?;
        if !venue.supports_sport(&request.sport) {
            return Err(AppError::unsupported_sport(request.sport));
        }

        let outcome = self
            .store_call(
                "slot claim",
                self.availability.claim(venue.id, request.date, &slots),
            )
            .await?;
        if let ClaimOutcome::Conflict {
            slots: conflicting,
        } = outcome
        {
            return Err(AppError::slot_conflict(conflicting));
        }

        // The slots are held from here on: every failure path below must
        // give them back before returning.
        let quote = pricing::quote(venue.price_per_hour, slots.len(), self.platform_fee_percent);

        let charge = ChargeRequest {
            amount: quote.final_amount,
            payer_id: ctx.user_id,
            payer_name: request.contact.name.clone(),
            payer_email: request.contact.email.clone(),
        };
        let payment = match self.payments.charge(&charge).await {
            Ok(ChargeOutcome::Approved { payment_id }) => payment_id,
            Ok(ChargeOutcome::Declined { reason }) => {
                self.rollback_claim(venue.id, request.date, &slots).await;
                return Err(AppError::payment(reason));
            }
            Err(e) => {
                self.rollback_claim(venue.id, request.date, &slots).await;
                return Err(e);
            }
        };

        let reference = match self.bookings.next_reference().await {
            Ok(reference) => reference,
            Err(e) => {
                self.rollback_claim(venue.id, request.date, &slots).await;
                return Err(e);
            }
        };

        let create = CreateBooking {
            reference,
            user_id: ctx.user_id,
            venue_id: venue.id,
            booking_date: request.date,
            time_slots: slots.clone(),
            sport: request.sport,
            player_count: request.player_count as i32,
            total_amount: quote.total_amount,
            platform_fee: quote.platform_fee,
            final_amount: quote.final_amount,
            status: BookingStatus::Confirmed,
            payment_status: PaymentStatus::Completed,
            payment_id: Some(payment),
            contact: request.contact,
            special_notes: request.notes,
        };

        let booking = match self.bookings.create(&create).await {
            Ok(booking) => booking,
            Err(e) => {
                self.rollback_claim(venue.id, request.date, &slots).await;
                return Err(e);
            }
        };

        info!(
            reference = %booking.reference,
            venue_id = %booking.venue_id,
            date = %booking.booking_date,
            slots = booking.time_slots.len(),
            final_amount = booking.final_amount,
            "Booking confirmed"
        );
        Ok(booking)
    }

    /// Cancel a booking.
    ///
    /// Only the owning user or an admin may cancel. Cancelling a booking
    /// that is already in a terminal state is an idempotent no-op, so a
    /// client may safely retry after a transient failure. Otherwise the
    /// booking transitions to `Cancelled` first and its slots are
    /// released afterwards.
    pub async fn cancel(&self, ctx: &RequestContext, booking_id: BookingId) -> AppResult<()> {
        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("booking {booking_id} not found")))?;

        if !booking.is_owned_by(ctx.user_id) && !ctx.is_admin() {
            return Err(AppError::unauthorized(
                "only the booking owner or an admin may cancel",
            ));
        }

        if booking.status.is_terminal() {
            info!(
                reference = %booking.reference,
                status = %booking.status,
                "Cancel is a no-op for a terminal booking"
            );
            return Ok(());
        }

        self.bookings
            .update_status(booking.id, BookingStatus::Cancelled)
            .await?;
        self.store_call(
            "slot release",
            self.availability
                .release(booking.venue_id, booking.booking_date, &booking.time_slots),
        )
        .await?;

        info!(
            reference = %booking.reference,
            venue_id = %booking.venue_id,
            date = %booking.booking_date,
            "Booking cancelled"
        );
        Ok(())
    }

    /// Canonicalize the requested slots: sorted, deduplicated, non-empty,
    /// and all drawn from the daily schedule.
    fn validate_slots(&self, requested: &[SlotLabel]) -> AppResult<Vec<SlotLabel>> {
        if requested.is_empty() {
            return Err(AppError::validation("at least one slot must be requested"));
        }
        let mut slots = requested.to_vec();
        slots.sort_unstable();
        slots.dedup();
        for slot in &slots {
            if !self.schedule.contains(*slot) {
                return Err(AppError::validation(format!(
                    "slot {slot} is outside the booking schedule"
                )));
            }
        }
        Ok(slots)
    }

    /// Run an availability-store call under the configured timeout.
    async fn store_call<T>(
        &self,
        op: &'static str,
        fut: impl Future<Output = AppResult<T>> + Send,
    ) -> AppResult<T> {
        match tokio::time::timeout(self.store_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(AppError::persistence(format!(
                "availability store {op} timed out"
            ))),
        }
    }

    /// Best-effort release of slots claimed earlier in a failed request.
    async fn rollback_claim(&self, venue_id: VenueId, date: NaiveDate, slots: &[SlotLabel]) {
        if let Err(e) = self
            .store_call("slot release", self.availability.release(venue_id, date, slots))
            .await
        {
            error!(
                venue_id = %venue_id,
                date = %date,
                error = %e,
                "Failed to roll back claimed slots"
            );
        }
    }
}

/// Reject dates that lie before today (UTC).
fn reject_past_date(date: NaiveDate) -> AppResult<()> {
    let today = Utc::now().date_naive();
    if date < today {
        return Err(AppError::invalid_date(format!(
            "{date} is in the past"
        )));
    }
    Ok(())
}
