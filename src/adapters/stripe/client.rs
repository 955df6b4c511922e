//! Stripe API client for checkout session creation.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::config::StripeConfig;
use crate::domain::payments::{CheckoutRequest, CheckoutSession};
use crate::ports::{CheckoutProvider, GatewayError};

/// Stripe client implementing the `CheckoutProvider` port.
///
/// Constructed once at startup; the underlying `reqwest::Client` pools
/// connections and is safe to share across requests.
pub struct StripeClient {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripeClient {
    /// Create a new client from validated configuration.
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Build the form parameters for a checkout-session creation call.
    ///
    /// The orderId metadata ends up on the payment intent so the charge
    /// delivered by the webhook carries it back unmodified.
    fn checkout_params(&self, request: &CheckoutRequest) -> Vec<(String, String)> {
        let mut params = vec![
            ("mode".to_string(), "payment".to_string()),
            ("success_url".to_string(), self.config.success_url.clone()),
            ("cancel_url".to_string(), self.config.cancel_url.clone()),
            (
                "payment_intent_data[metadata][orderId]".to_string(),
                request.order_id.clone(),
            ),
        ];

        for (i, item) in request.items.iter().enumerate() {
            params.push((
                format!("line_items[{i}][price_data][currency]"),
                request.currency.clone(),
            ));
            params.push((
                format!("line_items[{i}][price_data][product_data][name]"),
                item.name.clone(),
            ));
            params.push((
                format!("line_items[{i}][price_data][unit_amount]"),
                item.unit_amount().to_string(),
            ));
            params.push((format!("line_items[{i}][quantity]"), item.quantity.to_string()));
        }

        params
    }
}

/// Checkout session as returned by the Stripe API (fields we use).
#[derive(Debug, Deserialize)]
struct CheckoutSessionResponse {
    id: String,
    url: Option<String>,
    success_url: Option<String>,
    cancel_url: Option<String>,
}

#[async_trait]
impl CheckoutProvider for StripeClient {
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, GatewayError> {
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);
        let params = self.checkout_params(request);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(
                self.config.secret_key.expose_secret(),
                Option::<&str>::None,
            )
            .form(&params)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                order_id = %request.order_id,
                error = %error_text,
                "Stripe checkout session creation failed"
            );
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let session: CheckoutSessionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let session_url = session.url.ok_or_else(|| {
            GatewayError::InvalidResponse(format!("session {} has no checkout url", session.id))
        })?;

        tracing::info!(
            session_id = %session.id,
            order_id = %request.order_id,
            "Checkout session created"
        );

        Ok(CheckoutSession {
            success_url: session
                .success_url
                .unwrap_or_else(|| self.config.success_url.clone()),
            cancel_url: session
                .cancel_url
                .unwrap_or_else(|| self.config.cancel_url.clone()),
            session_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payments::LineItem;
    use secrecy::SecretString;

    fn test_client() -> StripeClient {
        StripeClient::new(StripeConfig {
            secret_key: SecretString::new("sk_test_key".to_string()),
            webhook_secret: SecretString::new("whsec_secret".to_string()),
            success_url: "https://shop.example.com/payments/success".to_string(),
            cancel_url: "https://shop.example.com/payments/cancel".to_string(),
            api_base_url: "https://api.stripe.com".to_string(),
            require_livemode: false,
        })
    }

    fn test_request() -> CheckoutRequest {
        CheckoutRequest {
            currency: "usd".to_string(),
            order_id: "ord_9".to_string(),
            items: vec![
                LineItem {
                    name: "Widget".to_string(),
                    price: 19.99,
                    quantity: 2,
                },
                LineItem {
                    name: "Gadget".to_string(),
                    price: 5.0,
                    quantity: 1,
                },
            ],
        }
    }

    // ══════════════════════════════════════════════════════════════
    // Form Parameter Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn params_include_mode_and_redirect_urls() {
        let params = test_client().checkout_params(&test_request());

        assert!(params.contains(&("mode".to_string(), "payment".to_string())));
        assert!(params.contains(&(
            "success_url".to_string(),
            "https://shop.example.com/payments/success".to_string()
        )));
        assert!(params.contains(&(
            "cancel_url".to_string(),
            "https://shop.example.com/payments/cancel".to_string()
        )));
    }

    #[test]
    fn params_attach_order_id_as_payment_intent_metadata() {
        let params = test_client().checkout_params(&test_request());

        assert!(params.contains(&(
            "payment_intent_data[metadata][orderId]".to_string(),
            "ord_9".to_string()
        )));
    }

    #[test]
    fn params_convert_prices_to_minor_units() {
        let params = test_client().checkout_params(&test_request());

        assert!(params.contains(&(
            "line_items[0][price_data][unit_amount]".to_string(),
            "1999".to_string()
        )));
        assert!(params.contains(&(
            "line_items[1][price_data][unit_amount]".to_string(),
            "500".to_string()
        )));
    }

    #[test]
    fn params_carry_currency_name_and_quantity_per_item() {
        let params = test_client().checkout_params(&test_request());

        assert!(params.contains(&(
            "line_items[0][price_data][currency]".to_string(),
            "usd".to_string()
        )));
        assert!(params.contains(&(
            "line_items[0][price_data][product_data][name]".to_string(),
            "Widget".to_string()
        )));
        assert!(params.contains(&("line_items[0][quantity]".to_string(), "2".to_string())));
        assert!(params.contains(&("line_items[1][quantity]".to_string(), "1".to_string())));
    }

    // ══════════════════════════════════════════════════════════════
    // Response Mapping Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn response_deserializes_expected_fields() {
        let json = r#"{
            "id": "cs_test_abc",
            "object": "checkout.session",
            "url": "https://checkout.stripe.com/c/pay/cs_test_abc",
            "success_url": "https://shop.example.com/payments/success",
            "cancel_url": "https://shop.example.com/payments/cancel",
            "mode": "payment"
        }"#;

        let session: CheckoutSessionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, "cs_test_abc");
        assert_eq!(
            session.url.as_deref(),
            Some("https://checkout.stripe.com/c/pay/cs_test_abc")
        );
    }

    #[test]
    fn response_tolerates_missing_urls() {
        let json = r#"{"id": "cs_expired", "url": null}"#;

        let session: CheckoutSessionResponse = serde_json::from_str(json).unwrap();
        assert!(session.url.is_none());
        assert!(session.success_url.is_none());
        assert!(session.cancel_url.is_none());
    }
}
