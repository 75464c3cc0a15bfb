//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `checkout` - Orchestrates the cart-to-order transition

pub mod checkout;

pub use checkout::CheckoutService;
