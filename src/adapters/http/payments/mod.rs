//! HTTP surface for the payments gateway.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AckResponse, CreatePaymentSessionRequest, CreatePaymentSessionResponse, ErrorResponse,
    LineItemRequest,
};
pub use handlers::{PaymentsApiError, PaymentsAppState};
pub use routes::{payments_router, payments_routes};
