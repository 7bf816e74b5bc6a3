//! Booking persistence contract.

use async_trait::async_trait;

use quickcourt_core::result::AppResult;
use quickcourt_core::types::booking_ref::BookingRef;
use quickcourt_core::types::id::{BookingId, UserId};

use super::model::{Booking, CreateBooking};
use super::status::{BookingStatus, PaymentStatus};

/// Persistence for booking records.
///
/// Bookings are append-plus-status-transition only; there is no delete
/// and no general update.
#[async_trait]
pub trait BookingStore: Send + Sync + 'static {
    /// Draw the next booking reference from the store's sequence.
    ///
    /// References are unique by construction; implementations back this
    /// with a database sequence or an atomic counter, never a random
    /// value.
    async fn next_reference(&self) -> AppResult<BookingRef>;

    /// Persist a new booking and return the stored record.
    async fn create(&self, booking: &CreateBooking) -> AppResult<Booking>;

    /// Find a booking by its record identifier.
    async fn find_by_id(&self, id: BookingId) -> AppResult<Option<Booking>>;

    /// Find a booking by its human-readable reference.
    async fn find_by_reference(&self, reference: &BookingRef) -> AppResult<Option<Booking>>;

    /// Set the lifecycle status of a booking.
    async fn update_status(&self, id: BookingId, status: BookingStatus) -> AppResult<()>;

    /// Set the payment status of a booking.
    async fn update_payment_status(&self, id: BookingId, status: PaymentStatus) -> AppResult<()>;

    /// List all bookings owned by a user, newest booking date first.
    async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<Booking>>;
}
