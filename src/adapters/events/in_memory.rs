//! In-memory event bus implementation for testing.
//!
//! Provides synchronous, deterministic event capture for unit and
//! integration tests. Not for production use: lock poisoning panics.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::payments::EventEnvelope;
use crate::ports::{EventPublisher, PublishError};

/// In-memory event bus for testing.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.publish(envelope).await?;
/// assert_eq!(bus.event_count(), 1);
/// assert!(bus.has_event("payment.succeeded"));
/// ```
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
    fail_next: RwLock<Option<String>>,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self {
            published: RwLock::new(Vec::new()),
            fail_next: RwLock::new(None),
        }
    }

    /// Returns all published events (for test assertions).
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .expect("InMemoryEventBus: published lock poisoned")
            .clone()
    }

    /// Returns events published under a specific subject.
    pub fn events_on_subject(&self, subject: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.subject == subject)
            .collect()
    }

    /// Returns count of published events.
    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .expect("InMemoryEventBus: published lock poisoned")
            .len()
    }

    /// Checks if anything was published under the given subject.
    pub fn has_event(&self, subject: &str) -> bool {
        self.published_events().iter().any(|e| e.subject == subject)
    }

    /// Clears all published events (for test isolation).
    pub fn clear(&self) {
        self.published
            .write()
            .expect("InMemoryEventBus: published write lock poisoned")
            .clear();
    }

    /// Makes every subsequent publish fail with the given message.
    pub fn fail_publishes(&self, message: impl Into<String>) {
        *self
            .fail_next
            .write()
            .expect("InMemoryEventBus: fail_next write lock poisoned") = Some(message.into());
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), PublishError> {
        if let Some(message) = self
            .fail_next
            .read()
            .expect("InMemoryEventBus: fail_next lock poisoned")
            .clone()
        {
            return Err(PublishError(message));
        }

        self.published
            .write()
            .expect("InMemoryEventBus: published write lock poisoned")
            .push(event);

        Ok(())
    }
}
