//! Checkout: pricing derivation, draft orders, and the submission flow.

mod flow;
mod order;
mod pricing;
mod service;

pub use flow::{CheckoutPhase, CheckoutSession};
pub use order::{current_timestamp, CustomerInfo, DraftOrder, OrderRecord, OrderStatus};
pub use pricing::{price_checkout, CheckoutPricing};
pub use service::{CheckoutService, SubmitOrder};
