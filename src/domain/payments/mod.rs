//! Payments domain.
//!
//! Covers both halves of the gateway:
//!
//! - checkout: order line items validated and converted into a hosted
//!   checkout session request
//! - webhook: Stripe callback payloads verified against the signing secret
//!   and mapped onto the internal event schema

mod checkout;
mod events;
mod stripe_event;
mod webhook_errors;
mod webhook_verifier;

pub use checkout::{CheckoutError, CheckoutRequest, CheckoutSession, LineItem};
pub use events::{EventEnvelope, PaymentSucceeded, PAYMENT_SUCCEEDED_SUBJECT};
pub use stripe_event::{EventKind, StripeCharge, StripeEvent, StripeEventData};
pub use webhook_errors::WebhookError;
pub use webhook_verifier::{SignatureHeader, WebhookVerifier};

#[cfg(test)]
pub use webhook_verifier::compute_test_signature;
