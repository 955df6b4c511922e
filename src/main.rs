//! Payments gateway binary.
//!
//! Loads and validates configuration, connects the outbound collaborators
//! once, and serves the HTTP surface. Startup fails fast on any missing or
//! malformed configuration value.

use std::sync::Arc;
use std::time::Duration;

use payments_gateway::adapters::http::{app, PaymentsAppState};
use payments_gateway::adapters::nats::NatsPublisher;
use payments_gateway::adapters::stripe::StripeClient;
use payments_gateway::config::AppConfig;
use payments_gateway::domain::payments::WebhookVerifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    if config.stripe.is_test_mode() {
        tracing::warn!("Stripe is configured with a test-mode key");
    }

    let publisher = NatsPublisher::connect(&config.nats).await?;

    let state = PaymentsAppState {
        checkout_provider: Arc::new(StripeClient::new(config.stripe.clone())),
        event_publisher: Arc::new(publisher),
        webhook_verifier: WebhookVerifier::new(config.stripe.webhook_secret.clone()),
        require_livemode: config.stripe.require_livemode && config.is_production(),
    };

    let router = app(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Payments gateway listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    tracing::info!("Shutdown signal received");
}
