//! Venue search filter.

use serde::{Deserialize, Serialize};

/// Sort order for venue search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueSort {
    /// Highest rated first.
    RatingDesc,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
}

impl Default for VenueSort {
    fn default() -> Self {
        Self::RatingDesc
    }
}

/// Filter criteria for venue search.
///
/// All fields are optional and combine conjunctively.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueFilter {
    /// Free-text search over name and location.
    pub query: Option<String>,
    /// Only venues offering this sport.
    pub sport: Option<String>,
    /// Minimum price per hour.
    pub min_price: Option<i64>,
    /// Maximum price per hour.
    pub max_price: Option<i64>,
    /// Minimum aggregate rating.
    pub min_rating: Option<f64>,
    /// Sort order.
    #[serde(default)]
    pub sort: VenueSort,
}
