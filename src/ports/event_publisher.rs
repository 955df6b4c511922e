//! EventPublisher port - interface for publishing domain events.
//!
//! This port defines how the gateway publishes events without knowing
//! about the underlying transport (in-memory for tests, NATS in production).

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::payments::EventEnvelope;

/// Port for publishing domain events.
///
/// Delivery is at-least-once: the processor redelivers webhooks, so
/// consumers may see the same charge twice and deduplicate on their side.
/// The publish is awaited; an error here fails the webhook response so
/// the processor retries instead of the event being dropped silently.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event envelope to its subject.
    async fn publish(&self, event: EventEnvelope) -> Result<(), PublishError>;
}

/// Publishing to the message bus failed.
#[derive(Debug, Error)]
#[error("Publish failed: {0}")]
pub struct PublishError(pub String);
