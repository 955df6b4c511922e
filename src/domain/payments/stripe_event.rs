//! Stripe webhook event types.
//!
//! Only the fields this gateway processes are captured; the rest of
//! Stripe's event schema is ignored by serde.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Stripe webhook event (simplified).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StripeEvent {
    /// Unique identifier for the event (evt_xxx format).
    pub id: String,

    /// Type of event (e.g. "charge.succeeded").
    #[serde(rename = "type")]
    pub event_type: String,

    /// Time at which the event was created (Unix timestamp).
    pub created: i64,

    /// Object containing event-specific data.
    pub data: StripeEventData,

    /// Whether this is a live mode event (vs test mode).
    #[serde(default)]
    pub livemode: bool,
}

/// Container for event-specific data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StripeEventData {
    /// The object that triggered the event (polymorphic based on event type).
    pub object: serde_json::Value,
}

impl StripeEvent {
    /// Parse the event type into a known enum variant.
    pub fn kind(&self) -> EventKind {
        EventKind::from_str(&self.event_type)
    }

    /// Attempts to deserialize the data object as the specified type.
    pub fn deserialize_object<T: serde::de::DeserializeOwned>(
        &self,
    ) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.object.clone())
    }
}

/// Event kinds this gateway dispatches on.
///
/// The enum is the complete dispatch table: adding a handled kind means
/// adding a variant here and a match arm in the webhook handler, which the
/// compiler enforces. Everything else lands in `Unhandled` explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A charge completed successfully.
    ChargeSucceeded,
    /// Authentic event of a kind we intentionally ignore.
    Unhandled,
}

impl EventKind {
    /// Parse event kind from the Stripe type string.
    pub fn from_str(s: &str) -> Self {
        match s {
            "charge.succeeded" => Self::ChargeSucceeded,
            _ => Self::Unhandled,
        }
    }
}

/// Charge object carried by a `charge.succeeded` event.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeCharge {
    /// Charge identifier (ch_xxx).
    pub id: String,

    /// Metadata attached to the payment intent at session creation.
    #[serde(default)]
    pub metadata: HashMap<String, String>,

    /// Receipt URL, if the processor generated one.
    #[serde(default)]
    pub receipt_url: Option<String>,
}

impl StripeCharge {
    /// Order id attached as metadata by the session creator.
    pub fn order_id(&self) -> Option<&str> {
        self.metadata.get("orderId").map(String::as_str)
    }
}
