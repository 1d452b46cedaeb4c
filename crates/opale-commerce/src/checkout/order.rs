//! Draft order and order record types.

use crate::cart::CartLineItem;
use crate::checkout::CheckoutPricing;
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;
use crate::shipping::DeliveryMethod;
use serde::{Deserialize, Serialize};

/// Order lifecycle status, as the back-office tracks it.
///
/// Serialized with the French labels the backend stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order recorded, awaiting the confirmation phone call.
    #[default]
    #[serde(rename = "en attente")]
    Pending,
    /// Order delivered to the customer.
    #[serde(rename = "livrée")]
    Delivered,
    /// Order cancelled.
    #[serde(rename = "annulée")]
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "en attente",
            OrderStatus::Delivered => "livrée",
            OrderStatus::Cancelled => "annulée",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// Customer contact details collected at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CustomerInfo {
    /// Full name.
    pub full_name: String,
    /// Phone number for the confirmation call.
    pub phone: String,
}

impl CustomerInfo {
    pub fn new(full_name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            phone: phone.into(),
        }
    }

    /// Both fields must be non-empty before submission.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.full_name.trim().is_empty() {
            return Err(CommerceError::InvalidCustomer(
                "full name is required".to_string(),
            ));
        }
        if self.phone.trim().is_empty() {
            return Err(CommerceError::InvalidCustomer(
                "phone number is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// The assembled, not-yet-submitted order record.
///
/// Line items are a deep snapshot of the cart at submission time; clearing
/// the cart afterwards does not touch them. Field names match the
/// backend's order row layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftOrder {
    /// Customer full name.
    pub full_name: String,
    /// Customer phone number.
    pub phone_number: String,
    /// Destination wilaya.
    pub wilaya: String,
    /// Selected delivery method.
    pub shipping_type: DeliveryMethod,
    /// Derived shipping cost.
    pub shipping_cost: Money,
    /// `subtotal + shipping_cost`.
    pub order_total: Money,
    /// Snapshot of the cart line items.
    pub order_items: Vec<CartLineItem>,
    /// Initial status, always pending.
    pub status: OrderStatus,
}

impl DraftOrder {
    /// Assemble a draft from validated checkout inputs.
    pub fn build(
        customer: &CustomerInfo,
        wilaya: impl Into<String>,
        shipping_type: DeliveryMethod,
        items: &[CartLineItem],
        pricing: &CheckoutPricing,
    ) -> Self {
        Self {
            full_name: customer.full_name.clone(),
            phone_number: customer.phone.clone(),
            wilaya: wilaya.into(),
            shipping_type,
            shipping_cost: pricing.shipping,
            order_total: pricing.total,
            order_items: items.to_vec(),
            status: OrderStatus::Pending,
        }
    }

    /// Total item count in the snapshot.
    pub fn item_count(&self) -> i64 {
        self.order_items.iter().map(|i| i.quantity).sum()
    }
}

/// A persisted order, as returned by the order store for the back-office.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRecord {
    /// Backend-assigned identifier.
    pub id: OrderId,
    /// The submitted order data.
    #[serde(flatten)]
    pub order: DraftOrder,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

/// Get current Unix timestamp.
pub fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
