//! Stub payment gateway.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use quickcourt_core::result::AppResult;
use quickcourt_core::traits::payment::{ChargeOutcome, ChargeRequest, PaymentGateway};

/// A payment gateway that approves every charge.
///
/// Real gateway integration is out of scope; this stands in wherever a
/// `PaymentGateway` is wired, including production single-node setups.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubPaymentGateway;

impl StubPaymentGateway {
    /// Creates the stub gateway.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentGateway for StubPaymentGateway {
    async fn charge(&self, request: &ChargeRequest) -> AppResult<ChargeOutcome> {
        let payment_id = format!("PAY-{}", Uuid::new_v4());
        debug!(
            amount = request.amount,
            payer_id = %request.payer_id,
            payment_id = %payment_id,
            "Stub gateway approved charge"
        );
        Ok(ChargeOutcome::Approved { payment_id })
    }
}
