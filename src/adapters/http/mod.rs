//! HTTP adapters - REST API implementations.

pub mod payments;

pub use payments::payments_router;
pub use payments::PaymentsAppState;

use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the complete application router with its middleware stack.
pub fn app(state: PaymentsAppState, request_timeout: Duration) -> Router {
    payments_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
}
