//! In-memory venue catalog.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use quickcourt_core::result::AppResult;
use quickcourt_core::types::id::VenueId;
use quickcourt_core::types::pagination::{PageRequest, PageResponse};
use quickcourt_entity::venue::catalog::VenueCatalog;
use quickcourt_entity::venue::filter::{VenueFilter, VenueSort};
use quickcourt_entity::venue::model::Venue;

/// In-memory venue catalog for single-node deployments and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryVenueCatalog {
    venues: Arc<Mutex<Vec<Venue>>>,
}

impl MemoryVenueCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-populated with venues.
    pub fn with_venues(venues: Vec<Venue>) -> Self {
        Self {
            venues: Arc::new(Mutex::new(venues)),
        }
    }

    /// Add a venue to the catalog.
    pub async fn insert(&self, venue: Venue) {
        self.venues.lock().await.push(venue);
    }
}

fn matches(venue: &Venue, filter: &VenueFilter) -> bool {
    if let Some(ref query) = filter.query {
        let query = query.to_lowercase();
        if !venue.name.to_lowercase().contains(&query)
            && !venue.location.to_lowercase().contains(&query)
        {
            return false;
        }
    }
    if let Some(ref sport) = filter.sport {
        if !venue.supports_sport(sport) {
            return false;
        }
    }
    if let Some(min_price) = filter.min_price {
        if venue.price_per_hour < min_price {
            return false;
        }
    }
    if let Some(max_price) = filter.max_price {
        if venue.price_per_hour > max_price {
            return false;
        }
    }
    if let Some(min_rating) = filter.min_rating {
        if venue.rating < min_rating {
            return false;
        }
    }
    true
}

#[async_trait]
impl VenueCatalog for MemoryVenueCatalog {
    async fn find_by_id(&self, id: VenueId) -> AppResult<Option<Venue>> {
        let venues = self.venues.lock().await;
        Ok(venues.iter().find(|venue| venue.id == id).cloned())
    }

    async fn search(
        &self,
        filter: &VenueFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Venue>> {
        let venues = self.venues.lock().await;
        let mut found: Vec<Venue> = venues
            .iter()
            .filter(|venue| matches(venue, filter))
            .cloned()
            .collect();

        match filter.sort {
            VenueSort::RatingDesc => found.sort_by(|a, b| {
                b.rating
                    .total_cmp(&a.rating)
                    .then(b.review_count.cmp(&a.review_count))
            }),
            VenueSort::PriceAsc => found.sort_by_key(|venue| venue.price_per_hour),
            VenueSort::PriceDesc => {
                found.sort_by_key(|venue| std::cmp::Reverse(venue.price_per_hour));
            }
        }

        let total = found.len() as u64;
        let items: Vec<Venue> = found
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }
}
