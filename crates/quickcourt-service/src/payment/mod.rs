//! Payment collaborators.

pub mod stub;

pub use stub::StubPaymentGateway;
