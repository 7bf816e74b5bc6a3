//! Venue catalog services.

pub mod service;

pub use service::VenueService;
