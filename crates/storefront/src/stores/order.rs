//! Order store: append-only collection of confirmed orders.

use std::collections::HashMap;
use std::sync::Mutex;

use fashionhub_core::{OrderId, Price, UserId};

use super::{StoreError, relock};
use crate::models::cart::CartItem;
use crate::models::order::{DeliveryAddress, Order};

/// Owns all orders, keyed by order ID. No update or delete path exists.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Mutex<HashMap<OrderId, Order>>,
}

impl OrderStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and append a confirmed order from a cart snapshot.
    ///
    /// Computes subtotal, total, and the delivery date. The snapshot is taken
    /// by value: the order owns its items and never observes later cart
    /// mutations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyCart`] if the snapshot has no items.
    pub fn create_order(
        &self,
        user_id: UserId,
        items: Vec<CartItem>,
        delivery_address: DeliveryAddress,
        payment_method: String,
        delivery_fee: Price,
    ) -> Result<Order, StoreError> {
        if items.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let order = Order::from_snapshot(
            user_id,
            items,
            delivery_address,
            payment_method,
            delivery_fee,
        );

        let mut orders = relock(self.orders.lock());
        orders.insert(order.id.clone(), order.clone());

        Ok(order)
    }

    /// All orders for a user, oldest first.
    pub fn list_for_user(&self, user_id: &UserId) -> Vec<Order> {
        let orders = relock(self.orders.lock());
        let mut result: Vec<Order> = orders
            .values()
            .filter(|order| order.user_id == *user_id)
            .cloned()
            .collect();
        result.sort_by_key(|order| order.created_at);
        result
    }
}
