//! Venue catalog contract.

use async_trait::async_trait;

use quickcourt_core::result::AppResult;
use quickcourt_core::types::id::VenueId;
use quickcourt_core::types::pagination::{PageRequest, PageResponse};

use super::filter::VenueFilter;
use super::model::Venue;

/// Read access to the venue catalog.
///
/// Implemented over PostgreSQL and in memory; the booking flow treats it
/// as a read-only collaborator.
#[async_trait]
pub trait VenueCatalog: Send + Sync + 'static {
    /// Find a venue by its identifier.
    async fn find_by_id(&self, id: VenueId) -> AppResult<Option<Venue>>;

    /// Search venues matching the filter, paginated.
    async fn search(
        &self,
        filter: &VenueFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Venue>>;
}
