//! Storefront domain logic for the Opale cosmetics shop.
//!
//! This crate holds the two pieces of the storefront with real invariants:
//!
//! - **Cart**: the shopping cart store with line-item merging, derived
//!   totals, and write-through persistence behind a storage seam
//! - **Shipping**: the wilaya → price-group tariff tables used to quote
//!   delivery costs
//! - **Checkout**: pure pricing derivation, draft-order assembly, the
//!   submission state machine, and the submission service
//!
//! Everything that talks to the outside world (product catalog backend,
//! order store, durable storage) sits behind a trait so the domain logic
//! can be tested in isolation.
//!
//! # Example
//!
//! ```rust,ignore
//! use opale_commerce::prelude::*;
//!
//! let mut cart = CartStore::new();
//! cart.add_to_cart(CartLineItem::new("prod-1", "Huile d'argan", Money::new(1000), 2, ""));
//!
//! let pricing = price_checkout(cart.cart_total(), Some("Oran"), DeliveryMethod::Domicile)?;
//! assert_eq!(pricing.total, Money::new(2600));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod shipping;

pub use error::CommerceError;
pub use ids::{OrderId, ProductId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{OrderId, ProductId};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{filter_products, Page, Product};

    // Cart
    pub use crate::cart::{
        CartLineItem, CartState, CartStorage, CartStore, KvCartStorage, NoopStorage,
        CART_STORAGE_KEY,
    };

    // Shipping
    pub use crate::shipping::{
        quote, shipping_cost, validate_tables, wilaya_group, DeliveryMethod, WILAYAS,
    };

    // Checkout
    pub use crate::checkout::{
        price_checkout, CheckoutPhase, CheckoutPricing, CheckoutService, CheckoutSession,
        CustomerInfo, DraftOrder, OrderRecord, OrderStatus, SubmitOrder,
    };
}
