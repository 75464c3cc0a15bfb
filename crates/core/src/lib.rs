//! FashionHub Core - Shared types library.
//!
//! This crate provides common types used across all FashionHub components:
//! - `storefront` - Public-facing e-commerce site
//! - `integration-tests` - HTTP-level tests against the storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no stores.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
