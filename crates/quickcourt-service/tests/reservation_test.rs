//! Integration tests for the reservation coordinator.
//!
//! Runs the full reserve/cancel flows against the in-memory
//! collaborators, including racing overlapping reservations to verify
//! the exactly-one-winner guarantee.

mod helpers;

use std::sync::Arc;

use async_trait::async_trait;

use helpers::{TestApp, reserve_request, slot, tomorrow, user_ctx, yesterday};
use quickcourt_core::AppError;
use quickcourt_core::config::booking::BookingConfig;
use quickcourt_core::result::AppResult;
use quickcourt_core::traits::payment::{ChargeOutcome, ChargeRequest, PaymentGateway};
use quickcourt_core::types::booking_ref::BookingRef;
use quickcourt_core::types::id::{BookingId, UserId, VenueId};
use quickcourt_entity::booking::model::{Booking, CreateBooking};
use quickcourt_entity::booking::status::{BookingStatus, PaymentStatus};
use quickcourt_entity::booking::store::BookingStore;
use quickcourt_service::reservation::ReservationService;

#[tokio::test]
async fn test_reserve_confirms_booking_and_computes_amounts() {
    let app = TestApp::new().await;
    let ctx = user_ctx();

    let booking = app
        .reservations
        .reserve(
            &ctx,
            reserve_request(app.venue.id, tomorrow(), &["14:00", "15:00"]),
        )
        .await
        .unwrap();

    // price 200 x 2 slots, 5% fee
    assert_eq!(booking.total_amount, 400);
    assert_eq!(booking.platform_fee, 20);
    assert_eq!(booking.final_amount, 420);

    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.payment_status, PaymentStatus::Completed);
    assert!(booking.payment_id.is_some());
    assert_eq!(booking.reference.as_str(), "QC000001");
    assert_eq!(booking.user_id, ctx.user_id);

    let labels: Vec<String> = booking.time_slots.iter().map(ToString::to_string).collect();
    assert_eq!(labels, ["14:00", "15:00"]);
}

#[tokio::test]
async fn test_reserved_slots_show_taken() {
    let app = TestApp::new().await;
    let date = tomorrow();

    app.reservations
        .reserve(&user_ctx(), reserve_request(app.venue.id, date, &["10:00", "18:00"]))
        .await
        .unwrap();

    let availability = app
        .reservations
        .check_availability(app.venue.id, date)
        .await
        .unwrap();

    assert!(!availability.is_free(slot("10:00")));
    assert!(!availability.is_free(slot("18:00")));
    assert!(availability.is_free(slot("11:00")));
    // Full schedule reported: 17 hourly slots from 06:00 to 22:00.
    assert_eq!(availability.slots.len(), 17);
    assert_eq!(availability.free_slots().len(), 15);
}

#[tokio::test]
async fn test_concurrent_requests_for_same_slot_one_wins() {
    let app = TestApp::new().await;
    let date = tomorrow();

    let ctx_a = user_ctx();
    let ctx_b = user_ctx();
    let first = app
        .reservations
        .reserve(&ctx_a, reserve_request(app.venue.id, date, &["18:00"]));
    let second = app
        .reservations
        .reserve(&ctx_b, reserve_request(app.venue.id, date, &["18:00"]));

    let (a, b) = tokio::join!(first, second);

    let (winner, loser) = match (a, b) {
        (Ok(booking), Err(err)) | (Err(err), Ok(booking)) => (booking, err),
        other => panic!("expected exactly one success, got {other:?}"),
    };

    assert_eq!(winner.time_slots, vec![slot("18:00")]);
    match loser {
        AppError::SlotConflict { slots } => assert_eq!(slots, vec![slot("18:00")]),
        other => panic!("expected slot conflict, got {other}"),
    }
}

#[tokio::test]
async fn test_losing_request_conflict_names_only_the_overlap() {
    let app = TestApp::new().await;
    let date = tomorrow();

    let ctx_a = user_ctx();
    let ctx_b = user_ctx();
    let first = app
        .reservations
        .reserve(
            &ctx_a,
            reserve_request(app.venue.id, date, &["14:00", "15:00"]),
        );
    let second = app
        .reservations
        .reserve(
            &ctx_b,
            reserve_request(app.venue.id, date, &["15:00", "16:00"]),
        );

    let (a, b) = tokio::join!(first, second);

    let loser = match (a, b) {
        (Ok(_), Err(err)) | (Err(err), Ok(_)) => err,
        other => panic!("expected exactly one success, got {other:?}"),
    };

    // Only the contested slot appears; the loser's free slot does not.
    match loser {
        AppError::SlotConflict { slots } => assert_eq!(slots, vec![slot("15:00")]),
        other => panic!("expected slot conflict, got {other}"),
    }

    // The losing request claimed nothing: its non-overlapping slot is
    // still free.
    let availability = app
        .reservations
        .check_availability(app.venue.id, date)
        .await
        .unwrap();
    let free = availability.is_free(slot("14:00")) || availability.is_free(slot("16:00"));
    assert!(free, "the loser's non-overlapping slot must stay free");
}

#[tokio::test]
async fn test_concurrent_disjoint_requests_both_succeed() {
    let app = TestApp::new().await;
    let date = tomorrow();

    let ctx_a = user_ctx();
    let ctx_b = user_ctx();
    let first = app
        .reservations
        .reserve(&ctx_a, reserve_request(app.venue.id, date, &["09:00"]));
    let second = app
        .reservations
        .reserve(&ctx_b, reserve_request(app.venue.id, date, &["20:00"]));

    let (a, b) = tokio::join!(first, second);
    assert!(a.is_ok(), "disjoint request failed: {:?}", a.err());
    assert!(b.is_ok(), "disjoint request failed: {:?}", b.err());
}

#[tokio::test]
async fn test_empty_slot_set_is_rejected() {
    let app = TestApp::new().await;

    let err = app
        .reservations
        .reserve(&user_ctx(), reserve_request(app.venue.id, tomorrow(), &[]))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)), "got {err}");
}

#[tokio::test]
async fn test_slot_outside_schedule_is_rejected() {
    let app = TestApp::new().await;

    let err = app
        .reservations
        .reserve(
            &user_ctx(),
            reserve_request(app.venue.id, tomorrow(), &["05:00"]),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)), "got {err}");
}

#[tokio::test]
async fn test_zero_players_is_rejected() {
    let app = TestApp::new().await;

    let mut request = reserve_request(app.venue.id, tomorrow(), &["12:00"]);
    request.player_count = 0;

    let err = app
        .reservations
        .reserve(&user_ctx(), request)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "got {err}");
}

#[tokio::test]
async fn test_past_date_is_rejected() {
    let app = TestApp::new().await;

    let err = app
        .reservations
        .reserve(
            &user_ctx(),
            reserve_request(app.venue.id, yesterday(), &["12:00"]),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)), "got {err}");

    let err = app
        .reservations
        .check_availability(app.venue.id, yesterday())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)), "got {err}");
}

#[tokio::test]
async fn test_unsupported_sport_is_rejected() {
    let app = TestApp::new().await;

    let mut request = reserve_request(app.venue.id, tomorrow(), &["12:00"]);
    request.sport = "Football".to_string();

    let err = app
        .reservations
        .reserve(&user_ctx(), request)
        .await
        .unwrap_err();
    assert!(
        matches!(err, AppError::UnsupportedSport { ref sport } if sport == "Football"),
        "got {err}"
    );
}

#[tokio::test]
async fn test_unknown_venue_is_not_found() {
    let app = TestApp::new().await;

    let err = app
        .reservations
        .reserve(
            &user_ctx(),
            reserve_request(VenueId::new(), tomorrow(), &["12:00"]),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {err}");
}

#[tokio::test]
async fn test_duplicate_labels_collapse_into_one_slot() {
    let app = TestApp::new().await;

    let booking = app
        .reservations
        .reserve(
            &user_ctx(),
            reserve_request(app.venue.id, tomorrow(), &["14:00", "14:00"]),
        )
        .await
        .unwrap();

    assert_eq!(booking.time_slots, vec![slot("14:00")]);
    assert_eq!(booking.total_amount, 200);
}

#[tokio::test]
async fn test_cancel_frees_slots_for_rebooking() {
    let app = TestApp::new().await;
    let ctx = user_ctx();
    let date = tomorrow();

    let booking = app
        .reservations
        .reserve(&ctx, reserve_request(app.venue.id, date, &["14:00", "15:00"]))
        .await
        .unwrap();

    app.reservations.cancel(&ctx, booking.id).await.unwrap();

    let availability = app
        .reservations
        .check_availability(app.venue.id, date)
        .await
        .unwrap();
    assert!(availability.is_free(slot("14:00")));
    assert!(availability.is_free(slot("15:00")));

    // Someone else can book the freed slots.
    let rebooked = app
        .reservations
        .reserve(
            &user_ctx(),
            reserve_request(app.venue.id, date, &["14:00", "15:00"]),
        )
        .await
        .unwrap();
    assert_eq!(rebooked.status, BookingStatus::Confirmed);
}

#[tokio::test]
async fn test_cancel_is_idempotent() {
    let app = TestApp::new().await;
    let ctx = user_ctx();
    let date = tomorrow();

    let booking = app
        .reservations
        .reserve(&ctx, reserve_request(app.venue.id, date, &["14:00"]))
        .await
        .unwrap();

    app.reservations.cancel(&ctx, booking.id).await.unwrap();
    // A retried cancel succeeds without touching the slots again.
    app.reservations.cancel(&ctx, booking.id).await.unwrap();

    let stored = app.bookings.find_by_id(booking.id).await.unwrap().unwrap();
    assert_eq!(stored.status, BookingStatus::Cancelled);

    // The freed slot stays claimable exactly once.
    let rebooked = app
        .reservations
        .reserve(&user_ctx(), reserve_request(app.venue.id, date, &["14:00"]))
        .await;
    assert!(rebooked.is_ok());
}

#[tokio::test]
async fn test_cancel_requires_owner_or_admin() {
    let app = TestApp::new().await;
    let owner = user_ctx();

    let booking = app
        .reservations
        .reserve(&owner, reserve_request(app.venue.id, tomorrow(), &["14:00"]))
        .await
        .unwrap();

    let stranger = user_ctx();
    let err = app
        .reservations
        .cancel(&stranger, booking.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)), "got {err}");

    // An admin may cancel on the owner's behalf.
    app.reservations
        .cancel(&helpers::admin_ctx(), booking.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_cancel_unknown_booking_is_not_found() {
    let app = TestApp::new().await;

    let err = app
        .reservations
        .cancel(&user_ctx(), BookingId::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {err}");
}

#[tokio::test]
async fn test_references_are_unique_across_bookings() {
    let app = TestApp::new().await;

    let first = app
        .reservations
        .reserve(&user_ctx(), reserve_request(app.venue.id, tomorrow(), &["10:00"]))
        .await
        .unwrap();
    let second = app
        .reservations
        .reserve(&user_ctx(), reserve_request(app.venue.id, tomorrow(), &["11:00"]))
        .await
        .unwrap();

    assert_ne!(first.reference, second.reference);
}

/// Gateway that declines every charge.
struct DecliningGateway;

#[async_trait]
impl PaymentGateway for DecliningGateway {
    async fn charge(&self, _request: &ChargeRequest) -> AppResult<ChargeOutcome> {
        Ok(ChargeOutcome::Declined {
            reason: "card declined".to_string(),
        })
    }
}

#[tokio::test]
async fn test_declined_payment_releases_slots_and_commits_nothing() {
    let app = TestApp::new().await;
    let date = tomorrow();

    let reservations = ReservationService::new(
        app.venues.clone(),
        app.availability.clone(),
        app.bookings.clone(),
        Arc::new(DecliningGateway),
        &BookingConfig::default(),
    )
    .unwrap();

    let ctx = user_ctx();
    let err = reservations
        .reserve(&ctx, reserve_request(app.venue.id, date, &["14:00", "15:00"]))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Payment(_)), "got {err}");

    // No booking was committed and the slots are free again.
    assert!(app.bookings.list_for_user(ctx.user_id).await.unwrap().is_empty());
    let availability = reservations
        .check_availability(app.venue.id, date)
        .await
        .unwrap();
    assert!(availability.is_free(slot("14:00")));
    assert!(availability.is_free(slot("15:00")));
}

/// Booking store whose writes always fail.
struct FailingBookingStore;

#[async_trait]
impl BookingStore for FailingBookingStore {
    async fn next_reference(&self) -> AppResult<BookingRef> {
        Ok(BookingRef::from_sequence(1))
    }

    async fn create(&self, _booking: &CreateBooking) -> AppResult<Booking> {
        Err(AppError::persistence("booking store unavailable"))
    }

    async fn find_by_id(&self, _id: BookingId) -> AppResult<Option<Booking>> {
        Ok(None)
    }

    async fn find_by_reference(&self, _reference: &BookingRef) -> AppResult<Option<Booking>> {
        Ok(None)
    }

    async fn update_status(&self, _id: BookingId, _status: BookingStatus) -> AppResult<()> {
        Err(AppError::persistence("booking store unavailable"))
    }

    async fn update_payment_status(
        &self,
        _id: BookingId,
        _status: PaymentStatus,
    ) -> AppResult<()> {
        Err(AppError::persistence("booking store unavailable"))
    }

    async fn list_for_user(&self, _user_id: UserId) -> AppResult<Vec<Booking>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_persistence_failure_rolls_back_the_claim() {
    let app = TestApp::new().await;
    let date = tomorrow();

    let reservations = ReservationService::new(
        app.venues.clone(),
        app.availability.clone(),
        Arc::new(FailingBookingStore),
        Arc::new(quickcourt_service::payment::StubPaymentGateway::new()),
        &BookingConfig::default(),
    )
    .unwrap();

    let err = reservations
        .reserve(
            &user_ctx(),
            reserve_request(app.venue.id, date, &["14:00", "15:00"]),
        )
        .await
        .unwrap_err();
    assert!(err.is_retryable(), "got {err}");

    // The claimed slots were rolled back before the error surfaced.
    let availability = reservations
        .check_availability(app.venue.id, date)
        .await
        .unwrap();
    assert!(availability.is_free(slot("14:00")));
    assert!(availability.is_free(slot("15:00")));
}
