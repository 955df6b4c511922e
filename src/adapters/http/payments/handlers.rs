//! HTTP handlers for the payments endpoints.
//!
//! These handlers connect axum routes to the application layer command
//! handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::payments::{
    CreatePaymentSessionCommand, CreatePaymentSessionHandler, CreateSessionError,
    ProcessWebhookCommand, ProcessWebhookHandler,
};
use crate::domain::payments::{WebhookError, WebhookVerifier};
use crate::ports::{CheckoutProvider, EventPublisher};

use super::dto::{
    AckResponse, CreatePaymentSessionRequest, CreatePaymentSessionResponse, ErrorResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned per request; every dependency is an Arc-wrapped read-only handle
/// constructed once at startup.
#[derive(Clone)]
pub struct PaymentsAppState {
    pub checkout_provider: Arc<dyn CheckoutProvider>,
    pub event_publisher: Arc<dyn EventPublisher>,
    pub webhook_verifier: WebhookVerifier,
    pub require_livemode: bool,
}

impl PaymentsAppState {
    /// Create handlers on demand from the shared state.
    pub fn create_session_handler(&self) -> CreatePaymentSessionHandler {
        CreatePaymentSessionHandler::new(self.checkout_provider.clone())
    }

    pub fn webhook_handler(&self) -> ProcessWebhookHandler {
        ProcessWebhookHandler::new(
            self.webhook_verifier.clone(),
            self.event_publisher.clone(),
        )
        .with_require_livemode(self.require_livemode)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /payments/create-payment-session - open a hosted checkout session
pub async fn create_payment_session(
    State(state): State<PaymentsAppState>,
    Json(request): Json<CreatePaymentSessionRequest>,
) -> Result<impl IntoResponse, PaymentsApiError> {
    let handler = state.create_session_handler();
    let cmd = CreatePaymentSessionCommand {
        currency: request.currency,
        order_id: request.order_id,
        items: request.items.into_iter().map(Into::into).collect(),
    };

    let session = handler.handle(cmd).await?;

    Ok(Json(CreatePaymentSessionResponse::from(session)))
}

/// GET /payments/success - static acknowledgement for the success redirect
pub async fn success() -> Json<AckResponse> {
    Json(AckResponse {
        ok: true,
        message: "Payment successful",
    })
}

/// GET /payments/cancel - static acknowledgement for the cancel redirect
pub async fn cancel() -> Json<AckResponse> {
    Json(AckResponse {
        ok: true,
        message: "Payment cancelled",
    })
}

/// POST /payments/webhook - Stripe webhook ingestion
///
/// The body is extracted as raw `Bytes` and handed to verification
/// untouched; any JSON round-trip here would invalidate every signature.
pub async fn stripe_webhook(
    State(state): State<PaymentsAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, PaymentsApiError> {
    let signature = headers
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or(WebhookError::MissingSignatureHeader)?;

    let handler = state.webhook_handler();
    let cmd = ProcessWebhookCommand {
        payload: body.to_vec(),
        signature: signature.to_string(),
    };

    handler.handle(cmd).await?;

    Ok(StatusCode::OK)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum PaymentsApiError {
    Session(CreateSessionError),
    Webhook(WebhookError),
}

impl From<CreateSessionError> for PaymentsApiError {
    fn from(err: CreateSessionError) -> Self {
        Self::Session(err)
    }
}

impl From<WebhookError> for PaymentsApiError {
    fn from(err: WebhookError) -> Self {
        Self::Webhook(err)
    }
}

impl IntoResponse for PaymentsApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code, message) = match &self {
            PaymentsApiError::Session(CreateSessionError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED", err.to_string())
            }
            PaymentsApiError::Session(CreateSessionError::Gateway(err)) => {
                tracing::error!(error = %err, "Checkout session creation failed");
                (StatusCode::BAD_GATEWAY, "GATEWAY_ERROR", err.to_string())
            }
            PaymentsApiError::Webhook(err) => {
                let code = match err {
                    WebhookError::MissingSignatureHeader
                    | WebhookError::MalformedSignatureHeader(_)
                    | WebhookError::SignatureMismatch
                    | WebhookError::TimestampOutOfTolerance { .. }
                    | WebhookError::TestModeRejected => "SIGNATURE_INVALID",
                    WebhookError::PayloadNotJson(_) => {
                        tracing::error!(error = %err, "Authenticated payload failed to parse");
                        "INTERNAL_PARSE_ERROR"
                    }
                    WebhookError::Publish(_) => {
                        tracing::error!(error = %err, "Event publish failed");
                        "PUBLISH_FAILED"
                    }
                };
                (err.status_code(), code, err.to_string())
            }
        };

        let body = ErrorResponse::new(error_code, message);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payments::CheckoutError;
    use crate::ports::GatewayError;

    fn status_of(err: PaymentsApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn validation_errors_map_to_bad_request() {
        let err = PaymentsApiError::Session(CreateSessionError::Validation(
            CheckoutError::EmptyItems,
        ));
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn gateway_errors_map_to_bad_gateway() {
        let err = PaymentsApiError::Session(CreateSessionError::Gateway(GatewayError::Network(
            "timeout".to_string(),
        )));
        assert_eq!(status_of(err), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn signature_errors_map_to_bad_request() {
        let err = PaymentsApiError::Webhook(WebhookError::SignatureMismatch);
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);

        let err = PaymentsApiError::Webhook(WebhookError::MissingSignatureHeader);
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_map_to_server_error() {
        let err = PaymentsApiError::Webhook(WebhookError::PayloadNotJson("eof".to_string()));
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);

        let err = PaymentsApiError::Webhook(WebhookError::Publish("down".to_string()));
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
