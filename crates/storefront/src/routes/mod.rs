//! HTTP route handlers for the storefront JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                 - Health check
//!
//! # Products
//! GET    /api/products           - Product listing (optional ?category= and ?q= filters)
//! GET    /api/products/{id}      - Product detail
//!
//! # Cart
//! GET    /api/cart               - Current user's cart (created lazily)
//! POST   /api/cart               - Add item {productId, size, color, quantity?}
//! DELETE /api/cart?itemId=ID     - Remove item
//!
//! # Orders
//! POST   /api/orders             - Checkout {deliveryAddress, paymentMethod}
//! GET    /api/orders             - Order history for the current user
//! ```

pub mod cart;
pub mod orders;
pub mod products;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new().route("/", get(cart::show).post(cart::add).delete(cart::remove))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/", get(orders::index).post(orders::create))
}

/// Create all API routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .nest("/api/cart", cart_routes())
        .nest("/api/orders", order_routes())
}

/// Build the complete application: API routes, health check, middleware.
///
/// Shared between the binary and the integration tests so both exercise the
/// same router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(axum::middleware::from_fn(
            crate::middleware::request_id_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. There are no external dependencies
/// to probe.
async fn health() -> &'static str {
    "ok"
}
