//! Payments Gateway - Stripe checkout adapter
//!
//! Creates hosted Stripe checkout sessions for orders and converts Stripe
//! webhook callbacks into `payment.succeeded` events published to NATS.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
