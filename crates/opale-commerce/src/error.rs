//! Commerce error types.

use crate::shipping::DeliveryMethod;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Checkout attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// No wilaya selected at submission time.
    #[error("No wilaya selected")]
    WilayaNotSelected,

    /// The selected wilaya has no price-group mapping.
    #[error("Unknown wilaya: {0}")]
    UnknownWilaya(String),

    /// The tariff table has no cell for this method and group.
    #[error("No tariff for {method} deliveries in group {group}")]
    MissingTariff { method: DeliveryMethod, group: u8 },

    /// Customer information failed validation.
    #[error("Invalid customer information: {0}")]
    InvalidCustomer(String),

    /// Illegal checkout phase transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidPhaseTransition {
        from: &'static str,
        to: &'static str,
    },

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Order submission failed at the backend; the cart is untouched and
    /// the submission may be retried.
    #[error("Order submission failed: {0}")]
    Submission(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
