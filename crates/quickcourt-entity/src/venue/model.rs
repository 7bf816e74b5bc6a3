//! Venue entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use quickcourt_core::types::id::VenueId;

/// A bookable sports venue.
///
/// Venues are read-only from the booking flow's perspective: reservations
/// never mutate a venue, only its availability rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venue {
    /// Unique venue identifier.
    pub id: VenueId,
    /// Display name.
    pub name: String,
    /// Short location string shown in listings.
    pub location: String,
    /// Longer free-text description.
    pub description: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Contact phone number.
    pub contact_phone: Option<String>,
    /// Contact email.
    pub contact_email: Option<String>,
    /// Price per one-hour slot, in integer currency units.
    pub price_per_hour: i64,
    /// Sports the venue supports.
    pub sports: Vec<String>,
    /// Amenity tags (parking, showers, ...).
    pub amenities: Vec<String>,
    /// Aggregate rating, 0.0–5.0.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: i32,
    /// When the venue was registered.
    pub created_at: DateTime<Utc>,
    /// When the venue was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Venue {
    /// Whether the venue offers the given sport (case-insensitive).
    pub fn supports_sport(&self, sport: &str) -> bool {
        self.sports
            .iter()
            .any(|s| s.eq_ignore_ascii_case(sport.trim()))
    }
}
