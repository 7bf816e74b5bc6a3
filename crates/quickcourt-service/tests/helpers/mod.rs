//! Shared test helpers for service integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};

use quickcourt_core::config::booking::BookingConfig;
use quickcourt_core::types::id::{UserId, VenueId};
use quickcourt_core::types::slot::SlotLabel;
use quickcourt_database::memory::{
    MemoryAvailabilityStore, MemoryBookingStore, MemoryVenueCatalog,
};
use quickcourt_entity::booking::model::ContactDetails;
use quickcourt_entity::user::UserRole;
use quickcourt_entity::venue::model::Venue;
use quickcourt_service::context::RequestContext;
use quickcourt_service::payment::StubPaymentGateway;
use quickcourt_service::reservation::{ReservationService, ReserveRequest};

/// Test wiring: in-memory collaborators plus the coordinator on top.
pub struct TestApp {
    /// Venue catalog, kept typed for direct seeding.
    pub venues: Arc<MemoryVenueCatalog>,
    /// Availability store.
    pub availability: Arc<MemoryAvailabilityStore>,
    /// Booking store.
    pub bookings: Arc<MemoryBookingStore>,
    /// The coordinator under test.
    pub reservations: ReservationService,
    /// The seeded default venue (price 200, Badminton + Tennis).
    pub venue: Venue,
}

impl TestApp {
    /// Create a test app with one seeded venue.
    pub async fn new() -> Self {
        let venue = venue("Elite Sports Arena", 200, &["Badminton", "Tennis"]);
        let venues = Arc::new(MemoryVenueCatalog::with_venues(vec![venue.clone()]));
        let availability = Arc::new(MemoryAvailabilityStore::new());
        let bookings = Arc::new(MemoryBookingStore::new());

        let reservations = ReservationService::new(
            venues.clone(),
            availability.clone(),
            bookings.clone(),
            Arc::new(StubPaymentGateway::new()),
            &BookingConfig::default(),
        )
        .expect("default booking config is valid");

        Self {
            venues,
            availability,
            bookings,
            reservations,
            venue,
        }
    }
}

/// Build a venue with the given name, hourly price, and sports.
pub fn venue(name: &str, price_per_hour: i64, sports: &[&str]) -> Venue {
    let now = Utc::now();
    Venue {
        id: VenueId::new(),
        name: name.to_string(),
        location: "Koramangala".to_string(),
        description: None,
        address: None,
        contact_phone: Some("+91 98765 43210".to_string()),
        contact_email: None,
        price_per_hour,
        sports: sports.iter().map(ToString::to_string).collect(),
        amenities: vec!["Parking".to_string()],
        rating: 4.5,
        review_count: 120,
        created_at: now,
        updated_at: now,
    }
}

/// Parse a slot label, panicking on bad test input.
pub fn slot(label: &str) -> SlotLabel {
    SlotLabel::parse(label).expect("valid slot label")
}

/// Tomorrow's date: always bookable.
pub fn tomorrow() -> NaiveDate {
    Utc::now().date_naive() + Duration::days(1)
}

/// Yesterday's date: always rejected.
pub fn yesterday() -> NaiveDate {
    Utc::now().date_naive() - Duration::days(1)
}

/// A regular user context.
pub fn user_ctx() -> RequestContext {
    RequestContext::new(UserId::new(), UserRole::User)
}

/// An admin context.
pub fn admin_ctx() -> RequestContext {
    RequestContext::new(UserId::new(), UserRole::Admin)
}

/// A reservation request for Badminton with two players.
pub fn reserve_request(venue_id: VenueId, date: NaiveDate, labels: &[&str]) -> ReserveRequest {
    ReserveRequest {
        venue_id,
        date,
        slots: labels.iter().map(|label| slot(label)).collect(),
        sport: "Badminton".to_string(),
        player_count: 2,
        contact: ContactDetails {
            name: Some("Asha Rao".to_string()),
            phone: Some("+91 91234 56789".to_string()),
            email: Some("asha@example.com".to_string()),
        },
        notes: None,
    }
}
