//! Axum router configuration for the payments endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{cancel, create_payment_session, stripe_webhook, success, PaymentsAppState};

/// Create the payments API router.
///
/// # Routes
///
/// - `POST /create-payment-session` - open a hosted checkout session
/// - `GET /success` - static acknowledgement after successful checkout
/// - `GET /cancel` - static acknowledgement after cancelled checkout
/// - `POST /webhook` - Stripe webhook ingestion (no auth, signature verified)
pub fn payments_routes() -> Router<PaymentsAppState> {
    Router::new()
        .route("/create-payment-session", post(create_payment_session))
        .route("/success", get(success))
        .route("/cancel", get(cancel))
        .route("/webhook", post(stripe_webhook))
}

/// Create the complete router, mounted at `/payments`.
pub fn payments_router() -> Router<PaymentsAppState> {
    Router::new().nest("/payments", payments_routes())
}
