//! Catalog types and pure view helpers.
//!
//! Products are fetched from the remote backend; the helpers here filter
//! and paginate the fetched list for the catalog grid without touching
//! cart state.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Category label (e.g., "Soins", "Parfums").
    pub category: String,
    /// Card image.
    pub thumbnail_url: String,
    /// Gallery images for the detail view.
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Unix timestamp of creation.
    #[serde(default)]
    pub created_at: i64,
}

impl Product {
    /// Create a product with the fields the storefront requires.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            category: category.into(),
            thumbnail_url: thumbnail_url.into(),
            image_urls: Vec::new(),
            created_at: 0,
        }
    }
}

/// Filter products by category and name search.
///
/// `category` of `None` means all categories. The query matches
/// case-insensitively against the product name; an empty query matches
/// everything.
pub fn filter_products<'a>(
    products: &'a [Product],
    category: Option<&str>,
    query: &str,
) -> Vec<&'a Product> {
    let query = query.trim().to_lowercase();
    products
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
        .collect()
}

/// Pagination over a filtered product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
}

impl Page {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Total number of pages for a list of `total` items.
    pub fn total_pages(&self, total: usize) -> usize {
        if total == 0 {
            1
        } else {
            (total + self.per_page - 1) / self.per_page
        }
    }

    /// The slice of `items` visible on this page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1).saturating_mul(self.per_page);
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.per_page).min(items.len());
        &items[start..end]
    }
}
