//! Booking repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use quickcourt_core::error::AppError;
use quickcourt_core::result::AppResult;
use quickcourt_core::types::booking_ref::BookingRef;
use quickcourt_core::types::id::{BookingId, UserId};
use quickcourt_entity::booking::model::{Booking, CreateBooking};
use quickcourt_entity::booking::status::{BookingStatus, PaymentStatus};
use quickcourt_entity::booking::store::BookingStore;

/// Repository for booking records.
///
/// Booking references come from the `booking_reference_seq` sequence, so
/// they are unique without any retry loop; a UNIQUE constraint on the
/// column backs that up.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for BookingRepository {
    async fn next_reference(&self) -> AppResult<BookingRef> {
        let seq: i64 = sqlx::query_scalar("SELECT nextval('booking_reference_seq')")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::persistence_with_source("failed to draw booking reference", e)
            })?;
        Ok(BookingRef::from_sequence(seq as u64))
    }

    async fn create(&self, booking: &CreateBooking) -> AppResult<Booking> {
        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings \
             (reference, user_id, venue_id, booking_date, time_slots, sport, player_count, \
              total_amount, platform_fee, final_amount, status, payment_status, payment_id, \
              user_name, user_phone, user_email, special_notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING *",
        )
        .bind(&booking.reference)
        .bind(booking.user_id)
        .bind(booking.venue_id)
        .bind(booking.booking_date)
        .bind(&booking.time_slots)
        .bind(&booking.sport)
        .bind(booking.player_count)
        .bind(booking.total_amount)
        .bind(booking.platform_fee)
        .bind(booking.final_amount)
        .bind(booking.status)
        .bind(booking.payment_status)
        .bind(&booking.payment_id)
        .bind(&booking.contact.name)
        .bind(&booking.contact.phone)
        .bind(&booking.contact.email)
        .bind(&booking.special_notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::persistence_with_source("failed to create booking", e))?;

        info!(
            reference = %created.reference,
            venue_id = %created.venue_id,
            date = %created.booking_date,
            "Booking persisted"
        );
        Ok(created)
    }

    async fn find_by_id(&self, id: BookingId) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::persistence_with_source("failed to find booking", e))
    }

    async fn find_by_reference(&self, reference: &BookingRef) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE reference = $1")
            .bind(reference)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::persistence_with_source("failed to find booking by reference", e)
            })
    }

    async fn update_status(&self, id: BookingId, status: BookingStatus) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE bookings SET status = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(status)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::persistence_with_source("failed to update booking status", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("booking {id} not found")));
        }
        Ok(())
    }

    async fn update_payment_status(&self, id: BookingId, status: PaymentStatus) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE bookings SET payment_status = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(status)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::persistence_with_source("failed to update payment status", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("booking {id} not found")));
        }
        Ok(())
    }

    async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 \
             ORDER BY booking_date DESC, created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::persistence_with_source("failed to list bookings", e))
    }
}
