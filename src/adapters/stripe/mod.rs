//! Stripe adapter.
//!
//! Implements the `CheckoutProvider` port against the Stripe API.
//!
//! # Security
//!
//! - The secret API key is held in `secrecy::SecretString` and sent only
//!   via HTTP basic auth on the API call
//! - Webhook signature verification lives in the domain
//!   (`domain::payments::WebhookVerifier`), not here

mod client;

pub use client::StripeClient;
