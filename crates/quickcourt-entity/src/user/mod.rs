//! User domain entities.
//!
//! Authentication itself is handled by an external identity provider;
//! only the role needed for authorization decisions lives here.

pub mod role;

pub use role::UserRole;
