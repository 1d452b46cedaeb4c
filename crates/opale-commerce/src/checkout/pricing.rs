//! Checkout pricing derivation.
//!
//! A pure recomputation: given the cart subtotal, the selected wilaya and
//! the delivery method, derive the shipping cost and grand total. There is
//! no cached state; callers recompute whenever any input changes.

use crate::error::CommerceError;
use crate::money::Money;
use crate::shipping::{quote, DeliveryMethod};
use serde::{Deserialize, Serialize};

/// Derived totals for the checkout summary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutPricing {
    /// Cart subtotal.
    pub subtotal: Money,
    /// Shipping cost for the selected wilaya and method.
    pub shipping: Money,
    /// `subtotal + shipping`.
    pub total: Money,
}

/// Derive shipping cost and order total.
///
/// An unselected wilaya blocks pricing (`WilayaNotSelected`) rather than
/// silently quoting zero shipping; an unmapped wilaya is likewise an error.
pub fn price_checkout(
    subtotal: Money,
    wilaya: Option<&str>,
    method: DeliveryMethod,
) -> Result<CheckoutPricing, CommerceError> {
    let wilaya = match wilaya {
        Some(w) if !w.trim().is_empty() => w,
        _ => return Err(CommerceError::WilayaNotSelected),
    };

    let shipping = quote(wilaya, method)?;
    let total = subtotal.try_add(shipping).ok_or(CommerceError::Overflow)?;

    Ok(CheckoutPricing {
        subtotal,
        shipping,
        total,
    })
}
