//! In-process backend for tests and demos.

use crate::{DataError, OrderStore, ProductStore};
use async_trait::async_trait;
use opale_commerce::catalog::Product;
use opale_commerce::checkout::{current_timestamp, DraftOrder, OrderRecord, OrderStatus, SubmitOrder};
use opale_commerce::error::CommerceError;
use opale_commerce::ids::{OrderId, ProductId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::debug;

/// In-memory implementation of both store traits.
///
/// Orders get sequential `ord-N` ids. Also implements the commerce crate's
/// [`SubmitOrder`] seam so a `CheckoutService` can run against it directly.
#[derive(Default)]
pub struct MemoryBackend {
    products: Mutex<Vec<Product>>,
    orders: Mutex<Vec<OrderRecord>>,
    next_order: AtomicU64,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the catalog.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            orders: Mutex::new(Vec::new()),
            next_order: AtomicU64::new(0),
        }
    }

    fn lock_products(&self) -> Result<std::sync::MutexGuard<'_, Vec<Product>>, DataError> {
        self.products
            .lock()
            .map_err(|_| DataError::Backend("product store lock poisoned".to_string()))
    }

    fn lock_orders(&self) -> Result<std::sync::MutexGuard<'_, Vec<OrderRecord>>, DataError> {
        self.orders
            .lock()
            .map_err(|_| DataError::Backend("order store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ProductStore for MemoryBackend {
    async fn fetch_products(&self) -> Result<Vec<Product>, DataError> {
        Ok(self.lock_products()?.clone())
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<Option<Product>, DataError> {
        Ok(self.lock_products()?.iter().find(|p| &p.id == id).cloned())
    }

    async fn create_product(&self, product: Product) -> Result<(), DataError> {
        debug!(product = %product.id, "product created");
        self.lock_products()?.push(product);
        Ok(())
    }

    async fn update_product(&self, product: Product) -> Result<(), DataError> {
        let mut products = self.lock_products()?;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product;
                Ok(())
            }
            None => Err(DataError::NotFound(product.id.to_string())),
        }
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), DataError> {
        let mut products = self.lock_products()?;
        let before = products.len();
        products.retain(|p| &p.id != id);
        if products.len() == before {
            return Err(DataError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderStore for MemoryBackend {
    async fn submit_order(&self, draft: DraftOrder) -> Result<OrderId, DataError> {
        let n = self.next_order.fetch_add(1, Ordering::SeqCst) + 1;
        let id = OrderId::new(format!("ord-{n}"));
        debug!(order = %id, total = %draft.order_total, "order recorded");
        self.lock_orders()?.push(OrderRecord {
            id: id.clone(),
            order: draft,
            created_at: current_timestamp(),
        });
        Ok(id)
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, DataError> {
        let mut orders = self.lock_orders()?.clone();
        orders.reverse(); // newest first
        Ok(orders)
    }

    async fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<(), DataError> {
        let mut orders = self.lock_orders()?;
        match orders.iter_mut().find(|o| &o.id == id) {
            Some(record) => {
                record.order.status = status;
                Ok(())
            }
            None => Err(DataError::NotFound(id.to_string())),
        }
    }
}

#[async_trait]
impl SubmitOrder for MemoryBackend {
    async fn submit_order(&self, draft: DraftOrder) -> Result<OrderId, CommerceError> {
        OrderStore::submit_order(self, draft)
            .await
            .map_err(|e| CommerceError::Submission(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opale_commerce::cart::CartLineItem;
    use opale_commerce::checkout::{price_checkout, CustomerInfo};
    use opale_commerce::money::Money;
    use opale_commerce::shipping::DeliveryMethod;

    fn sample_draft(name: &str) -> DraftOrder {
        let pricing =
            price_checkout(Money::new(1000), Some("Alger"), DeliveryMethod::Domicile).unwrap();
        DraftOrder::build(
            &CustomerInfo::new(name, "0550000000"),
            "Alger",
            DeliveryMethod::Domicile,
            &[CartLineItem::new("p1", "Sérum", Money::new(1000), 1, "")],
            &pricing,
        )
    }

    #[tokio::test]
    async fn test_product_crud() {
        let backend = MemoryBackend::new();
        let product = Product::new("p1", "Sérum éclat", Money::new(2400), "Soins", "serum.jpg");

        backend.create_product(product.clone()).await.unwrap();
        assert_eq!(backend.fetch_products().await.unwrap().len(), 1);

        let mut updated = product.clone();
        updated.price = Money::new(2600);
        backend.update_product(updated).await.unwrap();

        let fetched = backend
            .fetch_product(&ProductId::new("p1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.price, Money::new(2600));

        backend.delete_product(&ProductId::new("p1")).await.unwrap();
        assert!(backend.fetch_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let backend = MemoryBackend::new();
        let ghost = Product::new("ghost", "?", Money::zero(), "Soins", "");
        let err = backend.update_product(ghost).await.unwrap_err();
        assert!(matches!(err, DataError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_orders_listed_newest_first() {
        let backend = MemoryBackend::new();
        let first = OrderStore::submit_order(&backend, sample_draft("Premier")).await.unwrap();
        let second = OrderStore::submit_order(&backend, sample_draft("Second")).await.unwrap();

        let orders = backend.list_orders().await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, second);
        assert_eq!(orders[1].id, first);
    }

    #[tokio::test]
    async fn test_status_transition() {
        let backend = MemoryBackend::new();
        let id = OrderStore::submit_order(&backend, sample_draft("Amina")).await.unwrap();

        backend
            .update_status(&id, OrderStatus::Delivered)
            .await
            .unwrap();
        let orders = backend.list_orders().await.unwrap();
        assert_eq!(orders[0].order.status, OrderStatus::Delivered);

        let err = backend
            .update_status(&OrderId::new("ord-999"), OrderStatus::Cancelled)
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::NotFound(_)));
    }
}
