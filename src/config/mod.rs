//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PAYMENTS_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use payments_gateway::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod error;
mod nats;
mod server;
mod stripe;

pub use error::{ConfigError, ValidationError};
pub use nats::NatsConfig;
pub use server::{Environment, ServerConfig};
pub use stripe::StripeConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the payments gateway.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Stripe configuration (API key, webhook secret, redirect URLs)
    pub stripe: StripeConfig,

    /// NATS configuration (message bus servers)
    pub nats: NatsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PAYMENTS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PAYMENTS__SERVER__PORT=3003` -> `server.port = 3003`
    /// - `PAYMENTS__STRIPE__SECRET_KEY=...` -> `stripe.secret_key = ...`
    /// - `PAYMENTS__NATS__SERVERS=nats://a,nats://b` -> `nats.servers = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PAYMENTS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - Port and timeout bounds
    /// - Required API key prefixes
    /// - Redirect URL and NATS URL schemes
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.stripe.validate()?;
        self.nats.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to set environment variables for testing
    /// Uses double underscores to separate nested config values
    fn set_minimal_env() {
        env::set_var("PAYMENTS__STRIPE__SECRET_KEY", "sk_test_xxx");
        env::set_var("PAYMENTS__STRIPE__WEBHOOK_SECRET", "whsec_xxx");
        env::set_var(
            "PAYMENTS__STRIPE__SUCCESS_URL",
            "http://localhost:3003/payments/success",
        );
        env::set_var(
            "PAYMENTS__STRIPE__CANCEL_URL",
            "http://localhost:3003/payments/cancel",
        );
        env::set_var("PAYMENTS__NATS__SERVERS", "nats://localhost:4222");
    }

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("PAYMENTS__STRIPE__SECRET_KEY");
        env::remove_var("PAYMENTS__STRIPE__WEBHOOK_SECRET");
        env::remove_var("PAYMENTS__STRIPE__SUCCESS_URL");
        env::remove_var("PAYMENTS__STRIPE__CANCEL_URL");
        env::remove_var("PAYMENTS__NATS__SERVERS");
        env::remove_var("PAYMENTS__SERVER__PORT");
        env::remove_var("PAYMENTS__SERVER__ENVIRONMENT");
    }

    #[test]
    fn load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.nats.servers, "nats://localhost:4222");
        assert!(config.stripe.is_test_mode());
    }

    #[test]
    fn validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok());
        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_fails_without_stripe_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_err());
    }

    #[test]
    fn server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3003);
        assert_eq!(config.server.environment, Environment::Development);
    }

    #[test]
    fn custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PAYMENTS__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn is_production_tracks_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PAYMENTS__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }
}
