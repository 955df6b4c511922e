//! Adapters - implementations of the ports against real infrastructure.
//!
//! - `stripe` - checkout session creation against the Stripe API
//! - `nats` - event publishing to NATS
//! - `events` - in-memory event bus for tests
//! - `http` - axum REST surface

pub mod events;
pub mod http;
pub mod nats;
pub mod stripe;
