//! Cart route handlers.
//!
//! The cart endpoints return the full updated cart after every mutation so
//! clients can re-render without a second fetch. Request bodies deserialize
//! into `Option` fields and are validated by hand: missing required fields
//! must produce 400, not the extractor's default rejection.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use fashionhub_core::{CartItemId, ProductId};

use crate::error::{AppError, Result};
use crate::models::cart::Cart;
use crate::state::AppState;

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    /// Defaults to 1 when omitted.
    pub quantity: Option<i64>,
}

/// Remove-from-cart query parameters.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartQuery {
    pub item_id: Option<String>,
}

/// Return the current user's cart, creating an empty one on first access.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<Cart> {
    let user_id = state.current_user().id.clone();
    Json(state.carts().get_or_create(&user_id))
}

/// Add an item to the cart.
///
/// Merges into an existing line when the `(productId, size, color)` identity
/// key already appears; otherwise appends a new line with the price copied
/// from the catalog. Quantity is unbounded; stock is not checked.
#[instrument(skip(state, request))]
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<Cart>> {
    // Empty strings count as missing, same as absent fields
    let required = |field: Option<String>| field.filter(|value| !value.is_empty());
    let (Some(product_id), Some(size), Some(color)) = (
        required(request.product_id),
        required(request.size),
        required(request.color),
    ) else {
        return Err(AppError::InvalidInput("Missing required fields".to_string()));
    };

    let quantity = request.quantity.unwrap_or(1);
    let quantity = u32::try_from(quantity)
        .ok()
        .filter(|q| *q >= 1)
        .ok_or_else(|| AppError::InvalidInput("Quantity must be at least 1".to_string()))?;

    let product = state
        .catalog()
        .get(&ProductId::new(product_id))
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?
        .clone();

    let user_id = state.current_user().id.clone();
    let cart = state
        .carts()
        .add_item(&user_id, &product, size, color, quantity);

    Ok(Json(cart))
}

/// Remove an item from the cart by ID.
///
/// Removing an unknown ID is a no-op rather than an error; the cart's
/// `updatedAt` is refreshed either way.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Query(query): Query<RemoveFromCartQuery>,
) -> Result<Json<Cart>> {
    let item_id = query
        .item_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::InvalidInput("Item ID is required".to_string()))?;

    let user_id = state.current_user().id.clone();
    let cart = state
        .carts()
        .remove_item(&user_id, &CartItemId::new(item_id));

    Ok(Json(cart))
}
