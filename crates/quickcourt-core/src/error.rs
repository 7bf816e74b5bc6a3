//! Unified application error types for QuickCourt.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use thiserror::Error;

use crate::types::slot::SlotLabel;

/// The unified application error used throughout QuickCourt.
///
/// Validation failures are raised before any mutation; [`SlotConflict`]
/// is raised by the atomic claim step and names exactly the contested
/// slots; [`Persistence`] is the only retryable variant and is surfaced
/// only after any partial claims have been rolled back.
///
/// [`SlotConflict`]: AppError::SlotConflict
/// [`Persistence`]: AppError::Persistence
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested booking or availability date lies in the past.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The requested sport is not offered by the venue.
    #[error("sport '{sport}' is not offered at this venue")]
    UnsupportedSport {
        /// The sport that was requested.
        sport: String,
    },

    /// One or more requested slots were already claimed by another booking.
    #[error("slots no longer available: {}", format_slots(slots))]
    SlotConflict {
        /// The contested slot labels, sorted chronologically.
        slots: Vec<SlotLabel>,
    },

    /// The caller is neither the owner of the resource nor an admin.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Input validation failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The payment gateway declined or failed the charge.
    #[error("payment failed: {0}")]
    Payment(String),

    /// A persistence collaborator was unavailable or timed out.
    ///
    /// Retryable: the caller may repeat the operation.
    #[error("persistence error: {message}")]
    Persistence {
        /// A human-readable description of the failure.
        message: String,
        /// Optional underlying cause.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Create an invalid-date error.
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate(message.into())
    }

    /// Create an unsupported-sport error.
    pub fn unsupported_sport(sport: impl Into<String>) -> Self {
        Self::UnsupportedSport {
            sport: sport.into(),
        }
    }

    /// Create a slot-conflict error. The labels are sorted and deduplicated.
    pub fn slot_conflict(mut slots: Vec<SlotLabel>) -> Self {
        slots.sort_unstable();
        slots.dedup();
        Self::SlotConflict { slots }
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a payment error.
    pub fn payment(message: impl Into<String>) -> Self {
        Self::Payment(message.into())
    }

    /// Create a persistence error without an underlying cause.
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
            source: None,
        }
    }

    /// Create a persistence error with an underlying cause.
    pub fn persistence_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Persistence {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether the caller may retry the failed operation.
    ///
    /// Only persistence failures are transient; every other variant is a
    /// definitive answer about the request itself.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(format!("configuration error: {err}"))
    }
}

fn format_slots(slots: &[SlotLabel]) -> String {
    slots
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_persistence_is_retryable() {
        assert!(AppError::persistence("store down").is_retryable());
        assert!(!AppError::validation("bad input").is_retryable());
        assert!(!AppError::slot_conflict(vec![]).is_retryable());
        assert!(!AppError::payment("declined").is_retryable());
    }

    #[test]
    fn test_slot_conflict_sorts_and_dedupes() {
        let a = SlotLabel::parse("18:00").unwrap();
        let b = SlotLabel::parse("14:00").unwrap();
        let err = AppError::slot_conflict(vec![a, b, a]);
        match err {
            AppError::SlotConflict { slots } => {
                assert_eq!(slots, vec![b, a]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_conflict_message_lists_slots() {
        let err = AppError::slot_conflict(vec![
            SlotLabel::parse("14:00").unwrap(),
            SlotLabel::parse("15:00").unwrap(),
        ]);
        assert_eq!(err.to_string(), "slots no longer available: 14:00, 15:00");
    }
}
