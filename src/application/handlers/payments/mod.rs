//! Payments handlers.
//!
//! ## Commands
//! - Creating hosted checkout sessions
//! - Processing Stripe webhook callbacks

mod create_payment_session;
mod process_webhook;

pub use create_payment_session::{
    CreatePaymentSessionCommand, CreatePaymentSessionHandler, CreateSessionError,
};
pub use process_webhook::{ProcessWebhookCommand, ProcessWebhookHandler, ProcessWebhookResult};
