//! Booking query and administration services.

pub mod service;

pub use service::{BookingHistory, BookingService};
