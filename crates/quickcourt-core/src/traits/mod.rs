//! Collaborator contracts defined in `quickcourt-core` and implemented
//! by other crates.

pub mod availability;
pub mod payment;

pub use availability::{AvailabilityStore, ClaimOutcome, SlotRecord};
pub use payment::{ChargeOutcome, ChargeRequest, PaymentGateway};
