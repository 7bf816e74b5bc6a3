//! # quickcourt-core
//!
//! Core crate for QuickCourt. Contains collaborator traits, configuration
//! schemas, typed identifiers, slot/schedule value types, pagination, and
//! the unified error system.
//!
//! This crate has **no** internal dependencies on other QuickCourt crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
