//! Order submission orchestration.

use crate::cart::{CartStorage, CartStore};
use crate::checkout::{CheckoutSession, DraftOrder};
use crate::error::CommerceError;
use crate::ids::OrderId;
use async_trait::async_trait;
use tracing::{info, warn};

/// The single write operation the checkout flow depends on.
///
/// Implemented by the remote order store; the domain crate only sees this
/// seam.
#[async_trait]
pub trait SubmitOrder {
    /// Create the order record at the backend.
    ///
    /// Failures should be reported as [`CommerceError::Submission`] so the
    /// caller can offer a retry.
    async fn submit_order(&self, draft: DraftOrder) -> Result<OrderId, CommerceError>;
}

/// Drives a checkout session against the cart store and the order backend.
pub struct CheckoutService<O: SubmitOrder> {
    orders: O,
}

impl<O: SubmitOrder> CheckoutService<O> {
    pub fn new(orders: O) -> Self {
        Self { orders }
    }

    /// Access the underlying order backend.
    pub fn backend(&self) -> &O {
        &self.orders
    }

    /// Validate, price, assemble and submit the order.
    ///
    /// Validation failures (empty cart, missing customer fields, missing
    /// or unmapped wilaya) block submission and leave the session in
    /// `Editing`. A backend failure moves the session to `Failed` with the
    /// cart intact so the user can retry. Success clears the cart and
    /// moves the session to `Succeeded`.
    ///
    /// Dropping the returned future abandons the in-flight submission;
    /// its eventual result, if any, is ignored by design.
    pub async fn submit<S: CartStorage>(
        &self,
        session: &mut CheckoutSession,
        cart: &mut CartStore<S>,
    ) -> Result<OrderId, CommerceError> {
        // Everything checkable up front happens while still editing, so a
        // rejected submission never leaves the form stuck.
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        session.customer.validate()?;
        let pricing = session.pricing(cart.cart_total())?;
        let wilaya = session
            .wilaya
            .clone()
            .ok_or(CommerceError::WilayaNotSelected)?;

        session.start_submitting()?;

        let draft = DraftOrder::build(
            &session.customer,
            wilaya.clone(),
            session.delivery_method,
            cart.items(),
            &pricing,
        );

        match self.orders.submit_order(draft).await {
            Ok(order_id) => {
                // Either the backend committed or it didn't; on success we
                // know it did, so the cart session ends here.
                cart.clear_cart();
                session.succeed()?;
                info!(order = %order_id, wilaya = %wilaya, total = %pricing.total, "order submitted");
                Ok(order_id)
            }
            Err(e) => {
                session.fail()?;
                warn!(error = %e, "order submission failed, cart preserved");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLineItem;
    use crate::checkout::{CheckoutPhase, CustomerInfo, OrderStatus};
    use crate::money::Money;
    use crate::shipping::DeliveryMethod;
    use std::sync::Mutex;

    /// Order backend stub: records drafts, optionally failing.
    struct StubOrders {
        fail: bool,
        received: Mutex<Vec<DraftOrder>>,
    }

    impl StubOrders {
        fn accepting() -> Self {
            Self {
                fail: false,
                received: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                received: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SubmitOrder for StubOrders {
        async fn submit_order(&self, draft: DraftOrder) -> Result<OrderId, CommerceError> {
            if self.fail {
                return Err(CommerceError::Submission("network unreachable".to_string()));
            }
            self.received.lock().unwrap().push(draft);
            Ok(OrderId::new("ord-1"))
        }
    }

    fn filled_session() -> CheckoutSession {
        let mut session = CheckoutSession::new();
        session.customer = CustomerInfo::new("Amina B.", "0673331388");
        session.set_wilaya("Oran");
        session.set_delivery_method(DeliveryMethod::Domicile);
        session
    }

    fn cart_with_items() -> CartStore {
        let mut cart = CartStore::new();
        cart.add_to_cart(CartLineItem::new(
            "p1",
            "Sérum",
            Money::new(1000),
            2,
            "serum.jpg",
        ));
        cart
    }

    #[tokio::test]
    async fn test_successful_submission_clears_cart() {
        let service = CheckoutService::new(StubOrders::accepting());
        let mut session = filled_session();
        let mut cart = cart_with_items();

        let order_id = service.submit(&mut session, &mut cart).await.unwrap();

        assert_eq!(order_id.as_str(), "ord-1");
        assert!(cart.is_empty());
        assert_eq!(cart.cart_item_count(), 0);
        assert_eq!(session.phase(), CheckoutPhase::Succeeded);

        let received = service.orders.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].order_total, Money::new(2600));
        assert_eq!(received[0].status, OrderStatus::Pending);
        assert_eq!(received[0].order_items.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_submission_preserves_cart() {
        let service = CheckoutService::new(StubOrders::failing());
        let mut session = filled_session();
        let mut cart = cart_with_items();

        let err = service.submit(&mut session, &mut cart).await.unwrap_err();

        assert!(matches!(err, CommerceError::Submission(_)));
        assert_eq!(cart.cart_item_count(), 2);
        assert_eq!(session.phase(), CheckoutPhase::Failed);

        // Retry succeeds against a working backend
        session.retry().unwrap();
        let service = CheckoutService::new(StubOrders::accepting());
        service.submit(&mut session, &mut cart).await.unwrap();
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_empty_cart_blocks_submission() {
        let service = CheckoutService::new(StubOrders::accepting());
        let mut session = filled_session();
        let mut cart = CartStore::new();

        let err = service.submit(&mut session, &mut cart).await.unwrap_err();
        assert!(matches!(err, CommerceError::EmptyCart));
        assert_eq!(session.phase(), CheckoutPhase::Editing);
        assert!(service.orders.received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unselected_wilaya_blocks_submission() {
        let service = CheckoutService::new(StubOrders::accepting());
        let mut session = filled_session();
        session.wilaya = None;
        let mut cart = cart_with_items();

        let err = service.submit(&mut session, &mut cart).await.unwrap_err();
        assert!(matches!(err, CommerceError::WilayaNotSelected));

        // No order reached the backend and no zero-shipping draft exists
        assert!(service.orders.received.lock().unwrap().is_empty());
        assert_eq!(cart.cart_item_count(), 2);
        assert_eq!(session.phase(), CheckoutPhase::Editing);
    }

    #[tokio::test]
    async fn test_invalid_customer_blocks_submission() {
        let service = CheckoutService::new(StubOrders::accepting());
        let mut session = filled_session();
        session.customer = CustomerInfo::new("", "");
        let mut cart = cart_with_items();

        let err = service.submit(&mut session, &mut cart).await.unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCustomer(_)));
        assert_eq!(session.phase(), CheckoutPhase::Editing);
    }
}
