//! Cart persistence seam.
//!
//! The store writes through to durable storage after every item mutation.
//! Persistence is best-effort: a failed save is logged and swallowed, the
//! in-memory state stays authoritative for the session.

use crate::cart::CartState;
use opale_kv::{KeyValue, KvError};

/// Fixed namespace key for cart data in durable storage.
pub const CART_STORAGE_KEY: &str = "cart-storage";

/// Durable storage for the cart state.
pub trait CartStorage {
    /// Load the previously saved state, `None` if nothing was saved.
    fn load(&self) -> Result<Option<CartState>, KvError>;

    /// Save the current state, replacing any previous snapshot.
    fn save(&self, state: &CartState) -> Result<(), KvError>;
}

/// Storage that keeps nothing. Used for ephemeral carts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStorage;

impl CartStorage for NoopStorage {
    fn load(&self) -> Result<Option<CartState>, KvError> {
        Ok(None)
    }

    fn save(&self, _state: &CartState) -> Result<(), KvError> {
        Ok(())
    }
}

/// Cart storage backed by a key-value store.
pub struct KvCartStorage<K: KeyValue> {
    kv: K,
    key: String,
}

impl<K: KeyValue> KvCartStorage<K> {
    /// Use the default `cart-storage` namespace key.
    pub fn new(kv: K) -> Self {
        Self::with_key(kv, CART_STORAGE_KEY)
    }

    /// Use a custom namespace key.
    pub fn with_key(kv: K, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }
}

impl<K: KeyValue> CartStorage for KvCartStorage<K> {
    fn load(&self) -> Result<Option<CartState>, KvError> {
        self.kv.get(&self.key)
    }

    fn save(&self, state: &CartState) -> Result<(), KvError> {
        self.kv.set(&self.key, state)
    }
}
