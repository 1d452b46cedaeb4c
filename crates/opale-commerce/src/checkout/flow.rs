//! Checkout submission state machine.
//!
//! `Editing -> Submitting -> {Succeeded, Failed}`, with `Failed -> Editing`
//! for retries. `Succeeded` is terminal for the cart session: the cart is
//! empty afterwards and a new session starts the next purchase.

use crate::checkout::{price_checkout, CheckoutPricing, CustomerInfo};
use crate::error::CommerceError;
use crate::money::Money;
use crate::shipping::DeliveryMethod;
use serde::{Deserialize, Serialize};

/// Phase of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutPhase {
    /// User is filling the form.
    #[default]
    Editing,
    /// Submission in flight.
    Submitting,
    /// Order record created; terminal for this cart session.
    Succeeded,
    /// Submission failed; the user may retry.
    Failed,
}

impl CheckoutPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutPhase::Editing => "editing",
            CheckoutPhase::Submitting => "submitting",
            CheckoutPhase::Succeeded => "succeeded",
            CheckoutPhase::Failed => "failed",
        }
    }
}

/// State of one checkout attempt: form inputs plus the current phase.
#[derive(Debug, Clone, Default)]
pub struct CheckoutSession {
    /// Customer contact details.
    pub customer: CustomerInfo,
    /// Selected destination wilaya, if any.
    pub wilaya: Option<String>,
    /// Selected delivery method.
    pub delivery_method: DeliveryMethod,
    phase: CheckoutPhase,
}

impl CheckoutSession {
    /// Start a fresh session in the editing phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    /// Select the destination wilaya.
    pub fn set_wilaya(&mut self, wilaya: impl Into<String>) {
        self.wilaya = Some(wilaya.into());
    }

    /// Select the delivery method.
    pub fn set_delivery_method(&mut self, method: DeliveryMethod) {
        self.delivery_method = method;
    }

    /// Derive the current totals from the cart subtotal.
    ///
    /// Pure recomputation; call again whenever the cart, wilaya, or
    /// delivery method changes.
    pub fn pricing(&self, subtotal: Money) -> Result<CheckoutPricing, CommerceError> {
        price_checkout(subtotal, self.wilaya.as_deref(), self.delivery_method)
    }

    /// `Editing -> Submitting`.
    pub fn start_submitting(&mut self) -> Result<(), CommerceError> {
        self.transition(CheckoutPhase::Editing, CheckoutPhase::Submitting)
    }

    /// `Submitting -> Succeeded`.
    pub fn succeed(&mut self) -> Result<(), CommerceError> {
        self.transition(CheckoutPhase::Submitting, CheckoutPhase::Succeeded)
    }

    /// `Submitting -> Failed`.
    pub fn fail(&mut self) -> Result<(), CommerceError> {
        self.transition(CheckoutPhase::Submitting, CheckoutPhase::Failed)
    }

    /// `Failed -> Editing`: the user retries with the cart intact.
    pub fn retry(&mut self) -> Result<(), CommerceError> {
        self.transition(CheckoutPhase::Failed, CheckoutPhase::Editing)
    }

    fn transition(&mut self, from: CheckoutPhase, to: CheckoutPhase) -> Result<(), CommerceError> {
        if self.phase != from {
            return Err(CommerceError::InvalidPhaseTransition {
                from: self.phase.as_str(),
                to: to.as_str(),
            });
        }
        self.phase = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut session = CheckoutSession::new();
        assert_eq!(session.phase(), CheckoutPhase::Editing);

        session.start_submitting().unwrap();
        assert_eq!(session.phase(), CheckoutPhase::Submitting);

        session.succeed().unwrap();
        assert_eq!(session.phase(), CheckoutPhase::Succeeded);
    }

    #[test]
    fn test_failure_allows_retry() {
        let mut session = CheckoutSession::new();
        session.start_submitting().unwrap();
        session.fail().unwrap();
        assert_eq!(session.phase(), CheckoutPhase::Failed);

        session.retry().unwrap();
        assert_eq!(session.phase(), CheckoutPhase::Editing);
        session.start_submitting().unwrap();
    }

    #[test]
    fn test_illegal_transitions_error() {
        let mut session = CheckoutSession::new();

        // Cannot succeed or fail while still editing
        assert!(session.succeed().is_err());
        assert!(session.fail().is_err());
        assert!(session.retry().is_err());

        // Succeeded is terminal
        session.start_submitting().unwrap();
        session.succeed().unwrap();
        assert!(session.start_submitting().is_err());
        assert!(session.retry().is_err());
    }

    #[test]
    fn test_session_pricing_recomputes() {
        let mut session = CheckoutSession::new();
        assert!(session.pricing(Money::new(1000)).is_err());

        session.set_wilaya("Oran");
        session.set_delivery_method(DeliveryMethod::Domicile);
        let pricing = session.pricing(Money::new(2000)).unwrap();
        assert_eq!(pricing.total, Money::new(2600));

        session.set_delivery_method(DeliveryMethod::Bureau);
        let pricing = session.pricing(Money::new(2000)).unwrap();
        assert_eq!(pricing.total, Money::new(2450));
    }
}
