//! Order route handlers: checkout and order history.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::order::{DeliveryAddress, Order};
use crate::services::CheckoutService;
use crate::state::AppState;

/// Checkout request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub delivery_address: Option<DeliveryAddress>,
    pub payment_method: Option<String>,
}

/// Checkout response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order: Order,
    pub message: String,
}

/// Checkout: turn the current cart into a confirmed order.
///
/// Rejects a missing delivery address or payment method (400) and an empty
/// cart (400). On success the cart is cleared and the order is returned.
#[instrument(skip(state, request))]
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>> {
    let (Some(delivery_address), Some(payment_method)) =
        (request.delivery_address, request.payment_method)
    else {
        return Err(AppError::InvalidInput("Missing required fields".to_string()));
    };

    let user_id = state.current_user().id.clone();
    let checkout = CheckoutService::new(
        state.carts(),
        state.orders(),
        state.config().delivery_fee,
    );
    let order = checkout.place_order(&user_id, delivery_address, payment_method)?;

    Ok(Json(CreateOrderResponse {
        success: true,
        order,
        message: "Order created successfully".to_string(),
    }))
}

/// All orders for the current user, oldest first.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Order>> {
    let user_id = state.current_user().id.clone();
    Json(state.orders().list_for_user(&user_id))
}
