//! Ports - interfaces between the domain and the outside world.
//!
//! Adapters implement these traits; application handlers depend on them
//! as `Arc<dyn ...>` handles constructed once at startup.

mod checkout_provider;
mod event_publisher;

pub use checkout_provider::{CheckoutProvider, GatewayError};
pub use event_publisher::{EventPublisher, PublishError};
