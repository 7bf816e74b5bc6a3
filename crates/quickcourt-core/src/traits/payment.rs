//! Payment gateway trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::id::UserId;

/// A charge request handed to the payment collaborator.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ChargeRequest {
    /// Amount in integer currency units.
    pub amount: i64,
    /// The paying user.
    pub payer_id: UserId,
    /// Payer display name, if known.
    pub payer_name: Option<String>,
    /// Payer email, if known.
    pub payer_email: Option<String>,
}

/// Result of a charge attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChargeOutcome {
    /// The charge went through.
    Approved {
        /// Gateway-side payment reference.
        payment_id: String,
    },
    /// The charge was declined.
    Declined {
        /// Gateway-provided reason.
        reason: String,
    },
}

/// Trait for the external payment collaborator.
///
/// Real gateway integration is out of scope; the production wiring uses
/// a stub that always approves. A declined or failed charge must leave
/// no booking behind — the coordinator rolls back its slot claims before
/// surfacing the failure.
#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Attempt to charge the payer.
    async fn charge(&self, request: &ChargeRequest) -> AppResult<ChargeOutcome>;
}
