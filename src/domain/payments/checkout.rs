//! Checkout session request and response types.
//!
//! A `CheckoutRequest` carries an order's line items to the payment
//! processor; the processor answers with a hosted `CheckoutSession`.
//! Neither is persisted - both live for the duration of one call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single order line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name shown on the checkout page.
    pub name: String,

    /// Unit price in major currency units (e.g. 19.99).
    pub price: f64,

    /// Number of units.
    pub quantity: u32,
}

impl LineItem {
    /// Convert the unit price to the processor's minor-unit integer
    /// representation (cents). Rounds half away from zero.
    ///
    /// An off-by-one-cent mismatch here desynchronizes the charged amount
    /// from the order total.
    pub fn unit_amount(&self) -> i64 {
        (self.price * 100.0).round() as i64
    }
}

/// Request to open a hosted checkout session for one order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// ISO currency code (e.g. "usd").
    pub currency: String,

    /// Internal order identifier, attached as opaque metadata on the
    /// payment intent. This is the sole correlation mechanism between
    /// session creation and the webhook callback.
    pub order_id: String,

    /// Order line items.
    pub items: Vec<LineItem>,
}

impl CheckoutRequest {
    /// Validate the request before any outbound call is made.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.items.is_empty() {
            return Err(CheckoutError::EmptyItems);
        }
        for (index, item) in self.items.iter().enumerate() {
            if !item.price.is_finite() || item.price <= 0.0 {
                return Err(CheckoutError::InvalidPrice {
                    index,
                    price: item.price,
                });
            }
            if item.quantity == 0 {
                return Err(CheckoutError::InvalidQuantity { index });
            }
        }
        Ok(())
    }
}

/// A hosted checkout session returned to the caller.
///
/// Owned by the caller after return; this gateway keeps no record of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    /// URL the processor redirects to on successful payment.
    pub success_url: String,

    /// URL the processor redirects to on cancelled payment.
    pub cancel_url: String,

    /// URL of the hosted checkout page itself.
    pub session_url: String,
}

/// Invalid caller input for session creation. Reported as 4xx.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    #[error("Order must contain at least one item")]
    EmptyItems,

    #[error("Item {index} has invalid price {price}")]
    InvalidPrice { index: usize, price: f64 },

    #[error("Item {index} has zero quantity")]
    InvalidQuantity { index: usize },
}
