//! # quickcourt-entity
//!
//! Domain entity models for QuickCourt. Every struct in this crate
//! represents a database table row or a domain value object. Database
//! entities derive `sqlx::FromRow` in addition to `Debug`, `Clone`,
//! `Serialize`, and `Deserialize`. The entity-returning store contracts
//! (`VenueCatalog`, `BookingStore`) live next to the models they return.

pub mod availability;
pub mod booking;
pub mod user;
pub mod venue;
