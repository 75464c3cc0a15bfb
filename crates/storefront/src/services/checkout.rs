//! Checkout flow: the Cart-Active to Order-Confirmed transition.
//!
//! Preconditions: the cart is non-empty and delivery details are present
//! (field presence is checked at the handler). On success the order store
//! receives a snapshot of the cart items, which are then removed from the
//! cart. Only the snapshotted items are removed: an add that lands between
//! snapshot and removal stays in the cart.
//!
//! The transition is not atomic across the two stores: if order creation
//! fails, the cart is left untouched. Nothing is lost and no partial order
//! exists.

use fashionhub_core::{Price, UserId};

use crate::models::order::{DeliveryAddress, Order};
use crate::stores::{CartStore, OrderStore, StoreError};

/// Orchestrates the cart and order stores for checkout.
pub struct CheckoutService<'a> {
    carts: &'a CartStore,
    orders: &'a OrderStore,
    delivery_fee: Price,
}

impl<'a> CheckoutService<'a> {
    /// Create a checkout service over the given stores.
    #[must_use]
    pub const fn new(carts: &'a CartStore, orders: &'a OrderStore, delivery_fee: Price) -> Self {
        Self {
            carts,
            orders,
            delivery_fee,
        }
    }

    /// Turn the user's cart into a confirmed order, then remove the ordered
    /// items from the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyCart`] if the cart has no items; the cart
    /// is left as it was.
    pub fn place_order(
        &self,
        user_id: &UserId,
        delivery_address: DeliveryAddress,
        payment_method: String,
    ) -> Result<Order, StoreError> {
        let cart = self.carts.get_or_create(user_id);
        let ordered: Vec<_> = cart.items.iter().map(|item| item.id.clone()).collect();

        // Order creation validates the snapshot; the cart keeps its items
        // until the order exists.
        let order = self.orders.create_order(
            user_id.clone(),
            cart.items,
            delivery_address,
            payment_method,
            self.delivery_fee,
        )?;

        // Remove only what was ordered; adds racing the checkout survive
        self.carts.remove_items(user_id, &ordered);

        tracing::info!(
            order_id = %order.id,
            user_id = %order.user_id,
            total = %order.total,
            "Order confirmed"
        );

        Ok(order)
    }
}
