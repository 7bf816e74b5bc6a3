//! Booking entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use quickcourt_core::types::booking_ref::BookingRef;
use quickcourt_core::types::id::{BookingId, UserId, VenueId};
use quickcourt_core::types::slot::SlotLabel;

use super::status::{BookingStatus, PaymentStatus};

/// A venue booking.
///
/// Bookings are never deleted; their lifecycle is driven entirely by
/// status transitions. The money columns satisfy
/// `final_amount == total_amount + platform_fee` and
/// `total_amount == price_per_hour * time_slots.len()` in every
/// non-cancelled state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Record identifier (primary key).
    pub id: BookingId,
    /// Human-readable reference shown to users (`QC000417`).
    pub reference: BookingRef,
    /// The user who owns the booking.
    pub user_id: UserId,
    /// The booked venue.
    pub venue_id: VenueId,
    /// The calendar date being booked.
    pub booking_date: NaiveDate,
    /// Claimed slot labels, sorted and deduplicated. Never empty.
    pub time_slots: Vec<SlotLabel>,
    /// The sport being played.
    pub sport: String,
    /// Number of players, at least 1.
    pub player_count: i32,
    /// Slot total: price per hour times slot count.
    pub total_amount: i64,
    /// Platform fee surcharge.
    pub platform_fee: i64,
    /// Amount actually charged: total plus fee.
    pub final_amount: i64,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Payment status.
    pub payment_status: PaymentStatus,
    /// Gateway-side payment reference, when a charge was attempted.
    pub payment_id: Option<String>,
    /// Contact name captured at booking time.
    pub user_name: Option<String>,
    /// Contact phone captured at booking time.
    pub user_phone: Option<String>,
    /// Contact email captured at booking time.
    pub user_email: Option<String>,
    /// Free-text notes from the booker.
    pub special_notes: Option<String>,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Whether the given user owns this booking.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Contact details captured with a reservation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactDetails {
    /// Contact name.
    pub name: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Contact email.
    pub email: Option<String>,
}

/// Data required to persist a new booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    /// Human-readable reference, already drawn from the sequence.
    pub reference: BookingRef,
    /// The owning user.
    pub user_id: UserId,
    /// The booked venue.
    pub venue_id: VenueId,
    /// The calendar date being booked.
    pub booking_date: NaiveDate,
    /// Claimed slot labels, sorted and deduplicated.
    pub time_slots: Vec<SlotLabel>,
    /// The sport being played.
    pub sport: String,
    /// Number of players.
    pub player_count: i32,
    /// Slot total.
    pub total_amount: i64,
    /// Platform fee surcharge.
    pub platform_fee: i64,
    /// Amount charged.
    pub final_amount: i64,
    /// Initial lifecycle status.
    pub status: BookingStatus,
    /// Payment status from the gateway.
    pub payment_status: PaymentStatus,
    /// Gateway-side payment reference.
    pub payment_id: Option<String>,
    /// Contact details.
    pub contact: ContactDetails,
    /// Free-text notes.
    pub special_notes: Option<String>,
}
