//! Venue domain entities.

pub mod catalog;
pub mod filter;
pub mod model;

pub use catalog::VenueCatalog;
pub use filter::{VenueFilter, VenueSort};
pub use model::Venue;
