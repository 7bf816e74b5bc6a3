//! # quickcourt-service
//!
//! Business logic for QuickCourt. The central piece is the
//! [`reservation::ReservationService`], which turns a user's slot
//! selection into either a confirmed booking with exclusive slot
//! ownership or a rejection naming the conflicting slots. Collaborators
//! (venue catalog, availability store, booking store, payment gateway)
//! are injected as trait objects so they can be swapped between the
//! PostgreSQL and in-memory implementations.

pub mod booking;
pub mod context;
pub mod payment;
pub mod reservation;
pub mod venue;

pub use context::RequestContext;
