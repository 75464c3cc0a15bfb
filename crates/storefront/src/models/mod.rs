//! Domain models for the storefront.
//!
//! All models serialize with camelCase field names, matching the public JSON
//! API. Monetary fields use [`fashionhub_core::Price`] and serialize as
//! precision-preserving decimal strings.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{Cart, CartItem};
pub use order::{DeliveryAddress, Order};
pub use product::{Product, ProductColor};
pub use user::User;
