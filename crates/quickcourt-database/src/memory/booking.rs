//! In-memory booking store.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use quickcourt_core::error::AppError;
use quickcourt_core::result::AppResult;
use quickcourt_core::types::booking_ref::BookingRef;
use quickcourt_core::types::id::{BookingId, UserId};
use quickcourt_entity::booking::model::{Booking, CreateBooking};
use quickcourt_entity::booking::status::{BookingStatus, PaymentStatus};
use quickcourt_entity::booking::store::BookingStore;

/// In-memory booking store.
///
/// References come from an atomic counter, mirroring the database
/// sequence. Suitable for single-node deployments and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookingStore {
    bookings: Arc<Mutex<HashMap<BookingId, Booking>>>,
    sequence: Arc<AtomicU64>,
}

impl MemoryBookingStore {
    /// Create an empty booking store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn next_reference(&self) -> AppResult<BookingRef> {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(BookingRef::from_sequence(seq))
    }

    async fn create(&self, booking: &CreateBooking) -> AppResult<Booking> {
        let now = Utc::now();
        let stored = Booking {
            id: BookingId::new(),
            reference: booking.reference.clone(),
            user_id: booking.user_id,
            venue_id: booking.venue_id,
            booking_date: booking.booking_date,
            time_slots: booking.time_slots.clone(),
            sport: booking.sport.clone(),
            player_count: booking.player_count,
            total_amount: booking.total_amount,
            platform_fee: booking.platform_fee,
            final_amount: booking.final_amount,
            status: booking.status,
            payment_status: booking.payment_status,
            payment_id: booking.payment_id.clone(),
            user_name: booking.contact.name.clone(),
            user_phone: booking.contact.phone.clone(),
            user_email: booking.contact.email.clone(),
            special_notes: booking.special_notes.clone(),
            created_at: now,
            updated_at: now,
        };

        let mut bookings = self.bookings.lock().await;
        bookings.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: BookingId) -> AppResult<Option<Booking>> {
        let bookings = self.bookings.lock().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn find_by_reference(&self, reference: &BookingRef) -> AppResult<Option<Booking>> {
        let bookings = self.bookings.lock().await;
        Ok(bookings
            .values()
            .find(|booking| &booking.reference == reference)
            .cloned())
    }

    async fn update_status(&self, id: BookingId, status: BookingStatus) -> AppResult<()> {
        let mut bookings = self.bookings.lock().await;
        let booking = bookings
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("booking {id} not found")))?;
        booking.status = status;
        booking.updated_at = Utc::now();
        Ok(())
    }

    async fn update_payment_status(&self, id: BookingId, status: PaymentStatus) -> AppResult<()> {
        let mut bookings = self.bookings.lock().await;
        let booking = bookings
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("booking {id} not found")))?;
        booking.payment_status = status;
        booking.updated_at = Utc::now();
        Ok(())
    }

    async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        let bookings = self.bookings.lock().await;
        let mut owned: Vec<Booking> = bookings
            .values()
            .filter(|booking| booking.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| {
            b.booking_date
                .cmp(&a.booking_date)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(owned)
    }
}
