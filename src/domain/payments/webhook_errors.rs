//! Webhook error types.
//!
//! The HTTP status controls the processor's retry behavior: 4xx tells it a
//! genuinely invalid delivery will never succeed, 5xx asks for redelivery,
//! 2xx acknowledges.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that occur during webhook processing.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Request arrived without a signature header.
    #[error("Missing signature header")]
    MissingSignatureHeader,

    /// Signature header could not be parsed.
    #[error("Malformed signature header: {0}")]
    MalformedSignatureHeader(String),

    /// Computed signature does not match the header.
    #[error("Invalid signature")]
    SignatureMismatch,

    /// Event timestamp is outside the tolerance window.
    #[error("Timestamp outside tolerance window ({age_secs}s)")]
    TimestampOutOfTolerance { age_secs: i64 },

    /// Test-mode event received while livemode is required.
    #[error("Test mode event rejected")]
    TestModeRejected,

    /// Authenticated payload failed to parse. This is a schema mismatch
    /// with the processor, not a caller error.
    #[error("Verified payload failed to parse: {0}")]
    PayloadNotJson(String),

    /// Publish to the message bus failed.
    #[error("Event publish failed: {0}")]
    Publish(String),
}

impl WebhookError {
    /// Maps the error to the HTTP status returned to the processor.
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Authentication failures: the delivery is forged or stale,
            // a retry cannot fix it
            WebhookError::MissingSignatureHeader
            | WebhookError::MalformedSignatureHeader(_)
            | WebhookError::SignatureMismatch
            | WebhookError::TimestampOutOfTolerance { .. }
            | WebhookError::TestModeRejected => StatusCode::BAD_REQUEST,

            // Our bug or our outage: ask the processor to redeliver
            WebhookError::PayloadNotJson(_) | WebhookError::Publish(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_failures_return_bad_request() {
        assert_eq!(
            WebhookError::MissingSignatureHeader.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebhookError::MalformedSignatureHeader("no timestamp".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebhookError::SignatureMismatch.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebhookError::TimestampOutOfTolerance { age_secs: 600 }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebhookError::TestModeRejected.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn internal_failures_return_server_error() {
        assert_eq!(
            WebhookError::PayloadNotJson("eof".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            WebhookError::Publish("connection reset".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn display_includes_context() {
        let err = WebhookError::TimestampOutOfTolerance { age_secs: 301 };
        assert_eq!(err.to_string(), "Timestamp outside tolerance window (301s)");

        let err = WebhookError::PayloadNotJson("unexpected eof".to_string());
        assert!(err.to_string().contains("unexpected eof"));
    }
}
