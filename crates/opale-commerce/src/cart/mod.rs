//! Shopping cart: line items, the cart store, and its persistence seam.

mod persist;
mod state;
mod store;

pub use persist::{CartStorage, KvCartStorage, NoopStorage, CART_STORAGE_KEY};
pub use state::{CartLineItem, CartState};
pub use store::CartStore;
