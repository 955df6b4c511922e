//! NATS event publisher.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::NatsConfig;
use crate::domain::payments::EventEnvelope;
use crate::ports::{EventPublisher, PublishError};

/// Publishes domain events to NATS.
///
/// Connected once at startup. Each publish is flushed so a failed enqueue
/// is observed by the webhook path instead of being dropped silently.
pub struct NatsPublisher {
    client: async_nats::Client,
}

impl NatsPublisher {
    /// Connect to the configured NATS server list.
    pub async fn connect(config: &NatsConfig) -> Result<Self, PublishError> {
        let servers = config.server_list();
        info!(servers = ?servers, "Connecting to NATS");

        let client = async_nats::ConnectOptions::new()
            .name(&config.client_name)
            .connect(servers.join(","))
            .await
            .map_err(|e| PublishError(e.to_string()))?;

        info!("Connected to NATS");

        Ok(Self { client })
    }
}

#[async_trait]
impl EventPublisher for NatsPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), PublishError> {
        let mut headers = async_nats::HeaderMap::new();
        headers.insert("Nats-Msg-Id", event.event_id.as_str());

        let payload =
            serde_json::to_vec(&event.payload).map_err(|e| PublishError(e.to_string()))?;

        debug!(subject = %event.subject, event_id = %event.event_id, "Publishing event");

        self.client
            .publish_with_headers(event.subject.clone(), headers, payload.into())
            .await
            .map_err(|e| PublishError(e.to_string()))?;

        // publish only enqueues; flush confirms the write reached the server
        self.client
            .flush()
            .await
            .map_err(|e| PublishError(e.to_string()))?;

        Ok(())
    }
}
