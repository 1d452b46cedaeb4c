//! Type-safe key-value storage layer for the Opale storefront.
//!
//! This is the "durable local storage" collaborator: the cart store (and
//! anything else that needs to survive a reload) writes JSON documents
//! through the [`KeyValue`] trait without caring what sits behind it.
//!
//! # Example
//!
//! ```rust,ignore
//! use opale_kv::{KeyValue, MemoryKv};
//!
//! let kv = MemoryKv::new();
//! kv.set("cart-storage", &cart_state)?;
//! let restored: Option<CartState> = kv.get("cart-storage")?;
//! ```

mod error;
mod file;
mod kv;

pub use error::KvError;
pub use file::FileKv;
pub use kv::{KeyValue, MemoryKv};
