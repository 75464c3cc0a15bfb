//! Order domain types.
//!
//! Orders are immutable records created from a cart snapshot at checkout time.
//! There is no update or cancellation path; the collection is append-only.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use fashionhub_core::{OrderId, OrderStatus, Price, UserId};

use super::cart::CartItem;

/// Days between order creation and the promised delivery date.
pub const DELIVERY_DAYS: i64 = 7;

/// Where an order ships to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub address: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// An order created from a cart at checkout time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    /// Immutable snapshot of the cart items at checkout time.
    pub items: Vec<CartItem>,
    pub delivery_address: DeliveryAddress,
    /// Opaque payment method identifier (payment is simulated).
    pub payment_method: String,
    /// Sum of price * quantity over the snapshot.
    pub subtotal: Price,
    /// Flat fee, fixed at checkout time.
    pub delivery_fee: Price,
    /// subtotal + `delivery_fee`.
    pub total: Price,
    /// Checkout sets `Confirmed` directly; no pending step is produced.
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    /// `created_at` + [`DELIVERY_DAYS`].
    pub delivery_date: DateTime<Utc>,
}

impl Order {
    /// Build a confirmed order from a cart snapshot.
    ///
    /// Computes subtotal and total from the snapshot; the caller has already
    /// verified the snapshot is non-empty.
    #[must_use]
    pub fn from_snapshot(
        user_id: UserId,
        items: Vec<CartItem>,
        delivery_address: DeliveryAddress,
        payment_method: String,
        delivery_fee: Price,
    ) -> Self {
        let subtotal: Price = items.iter().map(CartItem::line_total).sum();
        let created_at = Utc::now();

        Self {
            id: OrderId::random(),
            user_id,
            items,
            delivery_address,
            payment_method,
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
            status: OrderStatus::Confirmed,
            created_at,
            delivery_date: created_at + Duration::days(DELIVERY_DAYS),
        }
    }
}
