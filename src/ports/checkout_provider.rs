//! CheckoutProvider port - interface to the external payment processor.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::payments::{CheckoutRequest, CheckoutSession};

/// Port for opening hosted checkout sessions with the payment processor.
///
/// Implementations make exactly one outbound call per invocation and never
/// retry: a duplicate call would double-create a checkout session for the
/// order. Transient failures surface to the caller as `GatewayError`.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Open a hosted checkout session for the given order.
    ///
    /// The request's `order_id` must be attached as opaque metadata on the
    /// payment intent so the webhook callback can recover it unmodified.
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, GatewayError>;
}

/// Processor call failed. Reported as 502-equivalent, never retried here.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure reaching the processor.
    #[error("Processor unreachable: {0}")]
    Network(String),

    /// Processor answered with a non-success status.
    #[error("Processor API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Processor answered 2xx but the body was not the expected shape.
    #[error("Unexpected processor response: {0}")]
    InvalidResponse(String),
}
