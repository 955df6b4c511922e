//! NATS configuration

use serde::Deserialize;

use super::error::ValidationError;

/// NATS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NatsConfig {
    /// Comma-separated list of NATS server URLs
    pub servers: String,

    /// Client connection name
    #[serde(default = "default_client_name")]
    pub client_name: String,
}

impl NatsConfig {
    /// Get the server list as a vector
    pub fn server_list(&self) -> Vec<String> {
        self.servers
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Validate NATS configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let servers = self.server_list();
        if servers.is_empty() {
            return Err(ValidationError::MissingRequired("NATS servers"));
        }
        for server in &servers {
            if !server.starts_with("nats://") && !server.starts_with("tls://") {
                return Err(ValidationError::InvalidNatsUrl(server.clone()));
            }
        }
        Ok(())
    }
}

fn default_client_name() -> String {
    "payments-gateway".to_string()
}
