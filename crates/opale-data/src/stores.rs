//! Store traits consumed by the storefront and the back-office.

use crate::DataError;
use async_trait::async_trait;
use opale_commerce::catalog::Product;
use opale_commerce::checkout::{DraftOrder, OrderRecord, OrderStatus};
use opale_commerce::ids::{OrderId, ProductId};

/// Read/write access to the product catalog.
///
/// The storefront only reads; the create/update/delete operations back the
/// admin product screens.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetch the full catalog.
    async fn fetch_products(&self) -> Result<Vec<Product>, DataError>;

    /// Fetch one product for the detail view.
    async fn fetch_product(&self, id: &ProductId) -> Result<Option<Product>, DataError>;

    /// Create a product.
    async fn create_product(&self, product: Product) -> Result<(), DataError>;

    /// Replace a product by id.
    async fn update_product(&self, product: Product) -> Result<(), DataError>;

    /// Delete a product by id.
    async fn delete_product(&self, id: &ProductId) -> Result<(), DataError>;
}

/// Order creation and back-office management.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Create an order record; returns the backend-assigned id.
    async fn submit_order(&self, draft: DraftOrder) -> Result<OrderId, DataError>;

    /// List all orders, newest first.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, DataError>;

    /// Update an order's status (back-office transition, any to any).
    async fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<(), DataError>;
}
