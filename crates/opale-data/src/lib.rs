//! Remote data store abstractions for the Opale storefront.
//!
//! The storefront delegates all persistence to an external backend; this
//! crate defines the seams it consumes — [`ProductStore`] for the catalog
//! and [`OrderStore`] for checkout and the back-office — plus an
//! in-process [`MemoryBackend`] used by tests and demos.
//!
//! A fetch or submit failure is reported to the caller for a user-facing
//! notification; it never corrupts cart state, which lives entirely in
//! `opale-commerce`.

mod analytics;
mod error;
mod memory;
mod stores;

pub use analytics::{sales_summary, SalesSummary};
pub use error::DataError;
pub use memory::MemoryBackend;
pub use stores::{OrderStore, ProductStore};
