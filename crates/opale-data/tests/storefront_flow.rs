//! End-to-end storefront scenario: browse, cart, checkout, back-office.

use opale_commerce::prelude::*;
use opale_data::{sales_summary, MemoryBackend, OrderStore, ProductStore};
use opale_kv::MemoryKv;

fn seeded_backend() -> MemoryBackend {
    MemoryBackend::with_products(vec![
        Product::new("p1", "Sérum éclat", Money::new(1000), "Soins", "serum.jpg"),
        Product::new("p2", "Eau de rose", Money::new(1200), "Parfums", "rose.jpg"),
    ])
}

#[tokio::test]
async fn browse_cart_and_checkout() {
    let backend = seeded_backend();

    // Tariff tables are checked once at startup
    validate_tables().unwrap();

    // Catalog feeds the cart
    let products = backend.fetch_products().await.unwrap();
    let serum = filter_products(&products, Some("Soins"), "sérum")[0];

    let kv = MemoryKv::new();
    let mut cart = CartStore::with_storage(KvCartStorage::new(kv.clone()));
    cart.add_to_cart(CartLineItem::new(
        serum.id.clone(),
        serum.name.clone(),
        serum.price,
        2,
        serum.thumbnail_url.clone(),
    ));
    assert_eq!(cart.cart_total(), Money::new(2000));

    // A reload in the middle of shopping keeps the cart
    let mut cart = CartStore::with_storage(KvCartStorage::new(kv.clone()));
    assert_eq!(cart.cart_item_count(), 2);

    // Checkout: Oran is group 2, domicile group 2 is 600 DA
    let mut session = CheckoutSession::new();
    session.customer = CustomerInfo::new("Amina B.", "0673331388");
    session.set_wilaya("Oran");
    session.set_delivery_method(DeliveryMethod::Domicile);

    let pricing = session.pricing(cart.cart_total()).unwrap();
    assert_eq!(pricing.shipping, Money::new(600));
    assert_eq!(pricing.total, Money::new(2600));

    let service = CheckoutService::new(backend);
    let order_id = service.submit(&mut session, &mut cart).await.unwrap();

    assert_eq!(session.phase(), CheckoutPhase::Succeeded);
    assert!(cart.is_empty());
    assert_eq!(cart.cart_item_count(), 0);

    // The cleared cart is what durable storage now holds
    let rehydrated = CartStore::with_storage(KvCartStorage::new(kv));
    assert!(rehydrated.is_empty());

    // Back-office sees the order and confirms delivery
    let backend = service.backend();
    let orders = backend.list_orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order_id);
    assert_eq!(orders[0].order.status, OrderStatus::Pending);
    assert_eq!(orders[0].order.order_total, Money::new(2600));
    assert_eq!(orders[0].order.order_items[0].quantity, 2);

    backend
        .update_status(&order_id, OrderStatus::Delivered)
        .await
        .unwrap();

    let summary = sales_summary(&backend.list_orders().await.unwrap());
    assert_eq!(summary.order_count, 1);
    assert_eq!(summary.delivered, 1);
    assert_eq!(summary.revenue, Money::new(2600));
}

#[tokio::test]
async fn unmapped_wilaya_never_ships_for_free() {
    let backend = seeded_backend();
    let products = backend.fetch_products().await.unwrap();

    let mut cart = CartStore::new();
    cart.add_to_cart(CartLineItem::new(
        products[0].id.clone(),
        products[0].name.clone(),
        products[0].price,
        1,
        "",
    ));

    let mut session = CheckoutSession::new();
    session.customer = CustomerInfo::new("Amina B.", "0673331388");
    session.set_wilaya("Wilaya imaginaire");

    let service = CheckoutService::new(backend);
    let err = service.submit(&mut session, &mut cart).await.unwrap_err();
    assert!(matches!(err, CommerceError::UnknownWilaya(_)));

    // Nothing was submitted, nothing was cleared
    assert_eq!(cart.cart_item_count(), 1);
    assert!(service.backend().list_orders().await.unwrap().is_empty());
}
