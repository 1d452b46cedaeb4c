//! Cart state and line item types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product entry in the cart.
///
/// Name, price and thumbnail are denormalized copies taken when the item
/// was first added; only the quantity accumulates afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Product identifier; unique within the cart.
    pub id: ProductId,
    /// Display name at time of add.
    pub name: String,
    /// Unit price at time of add.
    pub price: Money,
    /// Accumulated quantity, always >= 1 while stored.
    pub quantity: i64,
    /// Card image at time of add.
    pub thumbnail_url: String,
}

impl CartLineItem {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
            thumbnail_url: thumbnail_url.into(),
        }
    }

    /// Line total (`price * quantity`).
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

/// The full cart state owned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartState {
    /// Line items in insertion order, keyed by product id.
    pub items: Vec<CartLineItem>,
    /// Cart panel visibility. Pure UI state, never persisted.
    #[serde(skip)]
    pub is_open: bool,
}
