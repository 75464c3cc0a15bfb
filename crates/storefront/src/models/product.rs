//! Product domain types.
//!
//! Products are immutable after catalog load; cart items carry a denormalized
//! snapshot of the product as it looked at add time.

use serde::{Deserialize, Serialize};

use fashionhub_core::{Price, ProductCategory, ProductId};

/// A purchasable product from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable catalog ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Unit price (non-negative).
    pub price: Price,
    /// Top-level category.
    pub category: ProductCategory,
    /// Image URLs, at least one.
    pub images: Vec<String>,
    /// Available size labels, non-empty.
    pub sizes: Vec<String>,
    /// Available colors.
    pub colors: Vec<ProductColor>,
    /// Units on hand. Tracked but not enforced against cart operations.
    pub stock: u32,
}

/// A color option on a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductColor {
    /// Display name (e.g., "Navy").
    pub name: String,
    /// Swatch value (hex color).
    pub value: String,
    /// Optional image override shown when this color is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Case-insensitive free-text match across name, description, and category.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.category.as_str().contains(&query)
    }
}
