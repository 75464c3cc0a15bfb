//! Cart domain types.
//!
//! A cart is a user's in-progress, mutable selection of items. Line items are
//! keyed for merging by the identity key `(productId, size, color)`: adding a
//! variant already in the cart bumps its quantity instead of appending a
//! duplicate entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fashionhub_core::{CartId, CartItemId, Price, ProductId, UserId};

use super::product::Product;

/// A single line item in a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Unique per insertion.
    pub id: CartItemId,
    /// Catalog reference.
    pub product_id: ProductId,
    /// Product snapshot taken at add time (never refreshed).
    pub product: Product,
    /// Selected size label.
    pub size: String,
    /// Selected color name.
    pub color: String,
    /// Positive quantity. Unbounded; stock is not enforced.
    pub quantity: u32,
    /// Unit price copied from the catalog entry at add time.
    pub price: Price,
}

impl CartItem {
    /// Whether this item matches the given identity key.
    #[must_use]
    pub fn matches(&self, product_id: &ProductId, size: &str, color: &str) -> bool {
        self.product_id == *product_id && self.size == size && self.color == color
    }

    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// A user's cart. One per user, created lazily on first access.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: CartId,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    /// Fixed at creation.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation.
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// Create a fresh empty cart for a user.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: CartId::random(),
            user_id,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add an item, merging into an existing line when the identity key
    /// `(productId, size, color)` already appears. The unit price is copied
    /// from the product at add time. Refreshes `updatedAt`.
    ///
    /// Merged quantities saturate at `u32::MAX` rather than wrapping.
    pub fn add_item(&mut self, product: &Product, size: String, color: String, quantity: u32) {
        match self
            .items
            .iter_mut()
            .find(|item| item.matches(&product.id, &size, &color))
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
            None => self.items.push(CartItem {
                id: CartItemId::random(),
                product_id: product.id.clone(),
                product: product.clone(),
                size,
                color,
                quantity,
                price: product.price,
            }),
        }
        self.touch();
    }

    /// Remove an item by ID. Filter-based: removing an unknown ID is a no-op,
    /// but `updatedAt` is refreshed unconditionally.
    pub fn remove_item(&mut self, item_id: &CartItemId) {
        self.items.retain(|item| item.id != *item_id);
        self.touch();
    }

    /// Remove the given items (used by checkout to drop the ordered
    /// snapshot; items added after the snapshot was taken survive).
    /// Refreshes `updatedAt`.
    pub fn remove_items(&mut self, item_ids: &[CartItemId]) {
        self.items.retain(|item| !item_ids.contains(&item.id));
        self.touch();
    }

    /// Sum of line totals over all items.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
