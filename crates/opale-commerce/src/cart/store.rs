//! The cart store: single source of truth for cart contents.
//!
//! All mutations are synchronous, atomic state transitions driven by the
//! UI event loop; there is no concurrent writer. The store is an owned,
//! injectable value — components share it by reference, never through a
//! global.

use crate::cart::{CartLineItem, CartState, CartStorage, NoopStorage};
use crate::ids::ProductId;
use crate::money::Money;
use tracing::{debug, warn};

/// Owned cart state plus its persistence backend.
pub struct CartStore<S: CartStorage = NoopStorage> {
    state: CartState,
    storage: S,
}

impl CartStore<NoopStorage> {
    /// Create an empty, storage-free store.
    pub fn new() -> Self {
        Self {
            state: CartState::default(),
            storage: NoopStorage,
        }
    }
}

impl Default for CartStore<NoopStorage> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CartStorage> CartStore<S> {
    /// Create a store backed by durable storage, rehydrating any
    /// previously saved cart.
    ///
    /// A load failure degrades to an empty cart; a reload after a failed
    /// save may lose the cart, which is the accepted contract.
    pub fn with_storage(storage: S) -> Self {
        let state = match storage.load() {
            Ok(Some(state)) => state,
            Ok(None) => CartState::default(),
            Err(e) => {
                warn!(error = %e, "failed to load saved cart, starting empty");
                CartState::default()
            }
        };
        Self { state, storage }
    }

    /// Add an item to the cart.
    ///
    /// If a line item with the same product id exists, its quantity is
    /// incremented by `item.quantity`; the stored name, price and
    /// thumbnail keep the values of the first add.
    pub fn add_to_cart(&mut self, item: CartLineItem) {
        match self.state.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => existing.quantity += item.quantity,
            None => self.state.items.push(item),
        }
        self.persist();
    }

    /// Remove the line item with the given product id. No-op if absent.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        let before = self.state.items.len();
        self.state.items.retain(|i| &i.id != id);
        if self.state.items.len() != before {
            self.persist();
        }
    }

    /// Set a line item's quantity to an absolute value.
    ///
    /// A quantity of zero or less removes the line item entirely; a line
    /// item is never stored with quantity <= 0. No-op on an unknown id.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(id);
            return;
        }
        if let Some(item) = self.state.items.iter_mut().find(|i| &i.id == id) {
            item.quantity = quantity;
            self.persist();
        }
    }

    /// Flip the cart panel visibility. Pure UI state, never persisted.
    pub fn toggle_cart(&mut self) {
        self.state.is_open = !self.state.is_open;
    }

    /// Sum of `price * quantity` over all line items; zero when empty.
    pub fn cart_total(&self) -> Money {
        self.state.items.iter().map(|i| i.line_total()).sum()
    }

    /// Sum of all line item quantities (badge count), not the number of
    /// distinct products.
    pub fn cart_item_count(&self) -> i64 {
        self.state.items.iter().map(|i| i.quantity).sum()
    }

    /// Empty the cart. Does not touch the visibility flag.
    pub fn clear_cart(&mut self) {
        self.state.items.clear();
        self.persist();
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.state.items
    }

    /// Whether the cart panel is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Whether the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.state.items.is_empty()
    }

    /// Write-through after a mutation. Best-effort: a failure is logged
    /// and the in-memory state stays authoritative.
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.state) {
            warn!(error = %e, "cart persistence failed, in-memory state kept");
        } else {
            debug!(items = self.state.items.len(), "cart persisted");
        }
    }
}
