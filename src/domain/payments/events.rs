//! Domain events published by the gateway.
//!
//! The wire shape is the contract with the downstream order service:
//! field names are camelCase and must not drift from what its consumer
//! deserializes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject the payment-succeeded event is published under.
pub const PAYMENT_SUCCEEDED_SUBJECT: &str = "payment.succeeded";

/// Normalized domain event for a successful charge.
///
/// Published once per verified `charge.succeeded` callback. The processor
/// redelivers webhooks at-least-once, so the same charge may be published
/// more than once; the consumer deduplicates by `stripePaymentId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSucceeded {
    /// Processor charge identifier (ch_...).
    pub stripe_payment_id: String,

    /// Order identifier recovered from payment-intent metadata.
    pub order_id: String,

    /// Receipt URL, when the processor provided one.
    pub receipt_url: Option<String>,
}

impl PaymentSucceeded {
    /// Wrap the event for transport.
    pub fn to_envelope(&self) -> EventEnvelope {
        EventEnvelope {
            event_id: Uuid::new_v4().to_string(),
            subject: PAYMENT_SUCCEEDED_SUBJECT.to_string(),
            payload: serde_json::to_value(self)
                .expect("PaymentSucceeded serialization cannot fail"),
        }
    }
}

/// Transport wrapper for an outbound domain event.
///
/// The `event_id` travels as a message header so consumers can
/// deduplicate redeliveries without inspecting the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique id for this publish (UUIDv4).
    pub event_id: String,

    /// Bus subject to publish under.
    pub subject: String,

    /// Serialized event payload.
    pub payload: serde_json::Value,
}
