//! Venue lookup and search.

use std::sync::Arc;

use quickcourt_core::error::AppError;
use quickcourt_core::result::AppResult;
use quickcourt_core::types::id::VenueId;
use quickcourt_core::types::pagination::{PageRequest, PageResponse};
use quickcourt_entity::venue::catalog::VenueCatalog;
use quickcourt_entity::venue::filter::VenueFilter;
use quickcourt_entity::venue::model::Venue;

/// Read-side venue browsing service.
#[derive(Clone)]
pub struct VenueService {
    /// Venue catalog.
    venues: Arc<dyn VenueCatalog>,
}

impl VenueService {
    /// Creates a new venue service.
    pub fn new(venues: Arc<dyn VenueCatalog>) -> Self {
        Self { venues }
    }

    /// Gets a single venue.
    pub async fn get(&self, venue_id: VenueId) -> AppResult<Venue> {
        self.venues
            .find_by_id(venue_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("venue {venue_id} not found")))
    }

    /// Searches venues matching the filter.
    pub async fn search(
        &self,
        filter: &VenueFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Venue>> {
        self.venues.search(filter, page).await
    }
}
