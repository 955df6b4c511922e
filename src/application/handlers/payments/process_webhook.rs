//! ProcessWebhookHandler - command handler for Stripe webhook callbacks.

use std::sync::Arc;

use crate::domain::payments::{
    EventKind, PaymentSucceeded, StripeCharge, WebhookError, WebhookVerifier,
};
use crate::ports::EventPublisher;

/// Command carrying one webhook delivery.
///
/// `payload` is the raw request body exactly as received from the wire;
/// verification fails on any re-serialized copy.
#[derive(Debug, Clone)]
pub struct ProcessWebhookCommand {
    /// Raw webhook payload.
    pub payload: Vec<u8>,
    /// Value of the stripe-signature header.
    pub signature: String,
}

/// Result of webhook processing. All variants answer 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessWebhookResult {
    /// Verified charge published to the bus.
    Published { event_id: String },
    /// Verified charge without order correlation; nothing to publish.
    Acknowledged,
    /// Authentic event of a kind we do not handle.
    Ignored { event_type: String },
}

/// Handler for processing Stripe webhooks.
///
/// Verifies the signature, dispatches on the event kind, and publishes the
/// normalized domain event. Publishing only ever happens after verification
/// succeeds: no unverified payload data crosses into the internal schema.
pub struct ProcessWebhookHandler {
    verifier: WebhookVerifier,
    publisher: Arc<dyn EventPublisher>,
    require_livemode: bool,
}

impl ProcessWebhookHandler {
    pub fn new(verifier: WebhookVerifier, publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            verifier,
            publisher,
            require_livemode: false,
        }
    }

    /// Reject verified test-mode events (production deployments).
    pub fn with_require_livemode(mut self, require: bool) -> Self {
        self.require_livemode = require;
        self
    }

    pub async fn handle(
        &self,
        cmd: ProcessWebhookCommand,
    ) -> Result<ProcessWebhookResult, WebhookError> {
        let event = self.verifier.verify_and_parse(&cmd.payload, &cmd.signature)?;

        if self.require_livemode && !event.livemode {
            tracing::warn!(event_id = %event.id, "Rejected test mode event");
            return Err(WebhookError::TestModeRejected);
        }

        match event.kind() {
            EventKind::ChargeSucceeded => {
                let charge: StripeCharge = event
                    .deserialize_object()
                    .map_err(|e| WebhookError::PayloadNotJson(e.to_string()))?;

                let Some(order_id) = charge.order_id() else {
                    // Charge did not originate from this gateway (the session
                    // creator always attaches orderId); nothing downstream
                    // could correlate it with.
                    tracing::warn!(
                        event_id = %event.id,
                        charge_id = %charge.id,
                        "charge.succeeded without orderId metadata, acknowledging"
                    );
                    return Ok(ProcessWebhookResult::Acknowledged);
                };

                let message = PaymentSucceeded {
                    stripe_payment_id: charge.id.clone(),
                    order_id: order_id.to_string(),
                    receipt_url: charge.receipt_url.clone(),
                };
                let envelope = message.to_envelope();
                let event_id = envelope.event_id.clone();

                self.publisher
                    .publish(envelope)
                    .await
                    .map_err(|e| WebhookError::Publish(e.to_string()))?;

                tracing::info!(
                    event_id = %event.id,
                    charge_id = %charge.id,
                    order_id = %message.order_id,
                    "Published payment.succeeded"
                );

                Ok(ProcessWebhookResult::Published { event_id })
            }
            EventKind::Unhandled => {
                tracing::info!(
                    event_id = %event.id,
                    event_type = %event.event_type,
                    "Event not handled"
                );
                Ok(ProcessWebhookResult::Ignored {
                    event_type: event.event_type,
                })
            }
        }
    }
}
