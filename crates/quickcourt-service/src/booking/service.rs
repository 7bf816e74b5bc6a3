//! Booking history and administration.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use quickcourt_core::error::AppError;
use quickcourt_core::result::AppResult;
use quickcourt_core::types::booking_ref::BookingRef;
use quickcourt_core::types::id::BookingId;
use quickcourt_entity::booking::model::Booking;
use quickcourt_entity::booking::status::BookingStatus;
use quickcourt_entity::booking::store::BookingStore;

use crate::context::RequestContext;

/// A user's bookings grouped the way the bookings page presents them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingHistory {
    /// Non-completed bookings dated today or later.
    pub upcoming: Vec<Booking>,
    /// Completed bookings and bookings whose date has passed.
    pub past: Vec<Booking>,
    /// Cancelled bookings.
    pub cancelled: Vec<Booking>,
}

/// Booking reads and administrative status changes.
#[derive(Clone)]
pub struct BookingService {
    /// Booking store.
    bookings: Arc<dyn BookingStore>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(bookings: Arc<dyn BookingStore>) -> Self {
        Self { bookings }
    }

    /// Lists the acting user's bookings grouped into upcoming, past, and
    /// cancelled.
    pub async fn history(&self, ctx: &RequestContext) -> AppResult<BookingHistory> {
        let bookings = self.bookings.list_for_user(ctx.user_id).await?;
        let today = Utc::now().date_naive();

        let mut history = BookingHistory::default();
        for booking in bookings {
            if booking.status == BookingStatus::Cancelled {
                history.cancelled.push(booking);
            } else if booking.booking_date >= today && booking.status != BookingStatus::Completed {
                history.upcoming.push(booking);
            } else {
                history.past.push(booking);
            }
        }
        Ok(history)
    }

    /// Gets a booking by record id. Owner or admin only.
    pub async fn find(&self, ctx: &RequestContext, id: BookingId) -> AppResult<Booking> {
        let booking = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("booking {id} not found")))?;
        self.authorize_read(ctx, &booking)?;
        Ok(booking)
    }

    /// Gets a booking by its human-readable reference. Owner or admin only.
    pub async fn find_by_reference(
        &self,
        ctx: &RequestContext,
        reference: &BookingRef,
    ) -> AppResult<Booking> {
        let booking = self
            .bookings
            .find_by_reference(reference)
            .await?
            .ok_or_else(|| AppError::not_found(format!("booking {reference} not found")))?;
        self.authorize_read(ctx, &booking)?;
        Ok(booking)
    }

    /// Marks a confirmed booking as completed (admin).
    pub async fn mark_completed(&self, ctx: &RequestContext, id: BookingId) -> AppResult<()> {
        if !ctx.is_admin() {
            return Err(AppError::unauthorized(
                "only an admin may complete a booking",
            ));
        }

        let booking = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("booking {id} not found")))?;

        if !booking.status.can_transition_to(BookingStatus::Completed) {
            return Err(AppError::validation(format!(
                "a {} booking cannot be completed",
                booking.status
            )));
        }

        self.bookings
            .update_status(booking.id, BookingStatus::Completed)
            .await?;
        info!(reference = %booking.reference, "Booking completed");
        Ok(())
    }

    fn authorize_read(&self, ctx: &RequestContext, booking: &Booking) -> AppResult<()> {
        if booking.is_owned_by(ctx.user_id) || ctx.is_admin() {
            Ok(())
        } else {
            Err(AppError::unauthorized(
                "only the booking owner or an admin may view this booking",
            ))
        }
    }
}
