//! Repository implementations of the store contracts over PostgreSQL.

pub mod availability;
pub mod booking;
pub mod venue;

pub use availability::PgAvailabilityStore;
pub use booking::BookingRepository;
pub use venue::VenueRepository;
