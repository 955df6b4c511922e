//! NATS adapter.
//!
//! Implements the `EventPublisher` port over a NATS connection.

mod publisher;

pub use publisher::NatsPublisher;
