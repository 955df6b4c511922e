//! HTTP DTOs for the payments endpoints.
//!
//! These types define the JSON request/response structure and are the
//! boundary between HTTP and the application layer. Field names are
//! camelCase to match the existing API consumers.

use serde::{Deserialize, Serialize};

use crate::domain::payments::{CheckoutSession, LineItem};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to open a checkout session for an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentSessionRequest {
    /// ISO currency code applied to all items.
    pub currency: String,
    /// Internal order identifier.
    pub order_id: String,
    /// Order line items.
    pub items: Vec<LineItemRequest>,
}

/// One order line item.
#[derive(Debug, Clone, Deserialize)]
pub struct LineItemRequest {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl From<LineItemRequest> for LineItem {
    fn from(item: LineItemRequest) -> Self {
        LineItem {
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a created checkout session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentSessionResponse {
    /// URL the processor redirects to on cancellation.
    pub cancel_url: String,
    /// URL the processor redirects to on success.
    pub success_url: String,
    /// URL of the hosted checkout page.
    pub url: String,
}

impl From<CheckoutSession> for CreatePaymentSessionResponse {
    fn from(session: CheckoutSession) -> Self {
        Self {
            cancel_url: session.cancel_url,
            success_url: session.success_url,
            url: session.session_url,
        }
    }
}

/// Static acknowledgement for the success/cancel redirect pages.
#[derive(Debug, Clone, Serialize)]
pub struct AckResponse {
    pub ok: bool,
    pub message: &'static str,
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error code.
    pub error: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &'static str, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_camel_case() {
        let json = r#"{
            "currency": "usd",
            "orderId": "ord_9",
            "items": [{"name": "Widget", "price": 19.99, "quantity": 2}]
        }"#;

        let req: CreatePaymentSessionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.order_id, "ord_9");
        assert_eq!(req.items[0].quantity, 2);
    }

    #[test]
    fn session_response_uses_original_field_names() {
        let response: CreatePaymentSessionResponse = CheckoutSession {
            success_url: "https://s".to_string(),
            cancel_url: "https://c".to_string(),
            session_url: "https://pay".to_string(),
        }
        .into();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["cancelUrl"], "https://c");
        assert_eq!(json["successUrl"], "https://s");
        assert_eq!(json["url"], "https://pay");
    }

    #[test]
    fn error_response_shape() {
        let body = ErrorResponse::new("VALIDATION_FAILED", "Order must contain at least one item");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "VALIDATION_FAILED");
        assert!(json["message"].as_str().unwrap().contains("at least one"));
    }
}
