//! Cart store: per-user mutable carts behind a mutex-guarded map.

use std::collections::HashMap;
use std::sync::Mutex;

use fashionhub_core::{CartItemId, UserId};

use super::relock;
use crate::models::cart::Cart;
use crate::models::product::Product;

/// Owns all live carts, keyed by user. One cart per user, created lazily.
///
/// Methods return cloned snapshots; callers never hold a reference into the
/// map, so the lock is released before any response is serialized.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: Mutex<HashMap<UserId, Cart>>,
}

impl CartStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the user's cart, creating an empty one on first access.
    pub fn get_or_create(&self, user_id: &UserId) -> Cart {
        let mut carts = relock(self.carts.lock());
        carts
            .entry(user_id.clone())
            .or_insert_with(|| Cart::new(user_id.clone()))
            .clone()
    }

    /// Add an item to the user's cart, merging on a matching identity key.
    ///
    /// The caller has already resolved `product` against the catalog and
    /// validated the quantity. Returns the updated cart.
    pub fn add_item(
        &self,
        user_id: &UserId,
        product: &Product,
        size: String,
        color: String,
        quantity: u32,
    ) -> Cart {
        let mut carts = relock(self.carts.lock());
        let cart = carts
            .entry(user_id.clone())
            .or_insert_with(|| Cart::new(user_id.clone()));
        cart.add_item(product, size, color, quantity);
        cart.clone()
    }

    /// Remove an item from the user's cart by ID.
    ///
    /// Removing an unknown ID is a no-op, but the cart's `updatedAt` is still
    /// refreshed. Returns the updated cart.
    pub fn remove_item(&self, user_id: &UserId, item_id: &CartItemId) -> Cart {
        let mut carts = relock(self.carts.lock());
        let cart = carts
            .entry(user_id.clone())
            .or_insert_with(|| Cart::new(user_id.clone()));
        cart.remove_item(item_id);
        cart.clone()
    }

    /// Remove the given items from the user's cart, leaving any others.
    ///
    /// Checkout uses this to drop exactly the items it snapshotted, so an add
    /// that lands mid-checkout is not discarded. The cart itself persists.
    pub fn remove_items(&self, user_id: &UserId, item_ids: &[CartItemId]) {
        let mut carts = relock(self.carts.lock());
        if let Some(cart) = carts.get_mut(user_id) {
            cart.remove_items(item_ids);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use fashionhub_core::{Price, ProductCategory, ProductId};

    use super::*;
    use crate::models::product::ProductColor;

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: "Test".to_string(),
            price: Price::from_cents(10000),
            category: ProductCategory::Men,
            images: vec!["https://example.com/p.jpg".to_string()],
            sizes: vec!["M".to_string()],
            colors: vec![ProductColor {
                name: "Navy".to_string(),
                value: "#1B3A6B".to_string(),
                image: None,
            }],
            stock: 10,
        }
    }

    fn user() -> UserId {
        UserId::new("user-1")
    }

    #[test]
    fn test_get_or_create_is_lazy_and_stable() {
        let store = CartStore::new();
        let first = store.get_or_create(&user());
        let second = store.get_or_create(&user());

        assert!(first.is_empty());
        assert_eq!(first.id, second.id);
        assert_eq!(first.created_at, second.created_at);
    }

    #[test]
    fn test_one_cart_per_user() {
        let store = CartStore::new();
        let a = store.get_or_create(&UserId::new("a"));
        let b = store.get_or_create(&UserId::new("b"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_add_item_persists_across_reads() {
        let store = CartStore::new();
        store.add_item(&user(), &product("1"), "M".to_string(), "Navy".to_string(), 2);

        let cart = store.get_or_create(&user());
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items.first().unwrap().quantity, 2);
    }

    #[test]
    fn test_merge_through_store() {
        let store = CartStore::new();
        let p = product("1");
        store.add_item(&user(), &p, "M".to_string(), "Navy".to_string(), 1);
        let cart = store.add_item(&user(), &p, "M".to_string(), "Navy".to_string(), 4);

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items.first().unwrap().quantity, 5);
    }

    #[test]
    fn test_remove_items_empties_but_keeps_cart() {
        let store = CartStore::new();
        store.add_item(&user(), &product("1"), "M".to_string(), "Navy".to_string(), 1);
        let before = store.get_or_create(&user());
        let ids: Vec<_> = before.items.iter().map(|item| item.id.clone()).collect();

        store.remove_items(&user(), &ids);

        let after = store.get_or_create(&user());
        assert!(after.is_empty());
        assert_eq!(after.id, before.id);
    }

    #[test]
    fn test_remove_items_leaves_items_outside_the_snapshot() {
        let store = CartStore::new();
        store.add_item(&user(), &product("1"), "M".to_string(), "Navy".to_string(), 1);
        let snapshot: Vec<_> = store
            .get_or_create(&user())
            .items
            .iter()
            .map(|item| item.id.clone())
            .collect();

        // An add that lands after the snapshot was taken
        store.add_item(&user(), &product("2"), "M".to_string(), "Navy".to_string(), 3);

        store.remove_items(&user(), &snapshot);

        let cart = store.get_or_create(&user());
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items.first().unwrap().product_id, ProductId::new("2"));
    }

    #[test]
    fn test_concurrent_adds_do_not_lose_updates() {
        use std::sync::Arc;

        let store = Arc::new(CartStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store.add_item(
                        &UserId::new("user-1"),
                        &product("1"),
                        "M".to_string(),
                        "Navy".to_string(),
                        1,
                    );
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let cart = store.get_or_create(&UserId::new("user-1"));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items.first().unwrap().quantity, 8);
    }
}
