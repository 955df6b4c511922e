//! CreatePaymentSessionHandler - command handler for opening checkout sessions.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::payments::{CheckoutError, CheckoutRequest, CheckoutSession, LineItem};
use crate::ports::{CheckoutProvider, GatewayError};

/// Command to open a hosted checkout session for an order.
#[derive(Debug, Clone)]
pub struct CreatePaymentSessionCommand {
    /// ISO currency code for all line items.
    pub currency: String,
    /// Internal order identifier.
    pub order_id: String,
    /// Order line items.
    pub items: Vec<LineItem>,
}

/// Errors from session creation.
#[derive(Debug, Error)]
pub enum CreateSessionError {
    /// Bad caller input (4xx).
    #[error(transparent)]
    Validation(#[from] CheckoutError),

    /// Processor call failed (502-equivalent). Not retried: a retry
    /// could double-create a session for the order.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Handler for creating checkout sessions.
pub struct CreatePaymentSessionHandler {
    provider: Arc<dyn CheckoutProvider>,
}

impl CreatePaymentSessionHandler {
    pub fn new(provider: Arc<dyn CheckoutProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(
        &self,
        cmd: CreatePaymentSessionCommand,
    ) -> Result<CheckoutSession, CreateSessionError> {
        let request = CheckoutRequest {
            currency: cmd.currency,
            order_id: cmd.order_id,
            items: cmd.items,
        };

        request.validate()?;

        let session = self.provider.create_checkout_session(&request).await?;

        tracing::debug!(order_id = %request.order_id, "Checkout session returned to caller");

        Ok(session)
    }
}
