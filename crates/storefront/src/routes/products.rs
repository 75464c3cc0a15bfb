//! Product route handlers.
//!
//! Read-only views over the static catalog.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use fashionhub_core::{ProductCategory, ProductId};

use crate::error::{AppError, Result};
use crate::models::product::Product;
use crate::state::AppState;

/// Product listing filters.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    /// Restrict to a category.
    pub category: Option<ProductCategory>,
    /// Free-text search across name, description, and category.
    pub q: Option<String>,
}

/// List products, optionally filtered by category and/or free text.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Json<Vec<Product>> {
    let products = query.q.as_deref().map_or_else(
        || state.catalog().all().iter().collect::<Vec<_>>(),
        |q| state.catalog().search(q),
    );

    let products = products
        .into_iter()
        .filter(|p| query.category.is_none_or(|c| p.category == c))
        .cloned()
        .collect();

    Json(products)
}

/// Product detail by catalog ID.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    state
        .catalog()
        .get(&ProductId::new(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}
