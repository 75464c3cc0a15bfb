//! In-memory stores for carts and orders.
//!
//! Each store guards its map with a `std::sync::Mutex`: every operation is a
//! read-modify-write cycle, and axum handlers for the same user can run on
//! different runtime threads. No lock is ever held across an await point.
//!
//! State lives for the process lifetime only. Swapping in durable storage
//! means replacing these two types; the route and service layers only see
//! their method contracts.

pub mod cart;
pub mod order;

pub use cart::CartStore;
pub use order::OrderStore;

use std::sync::{LockResult, MutexGuard, PoisonError};

use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An order was requested from an empty cart snapshot.
    #[error("Cart is empty")]
    EmptyCart,
}

/// Recover the guard from a poisoned mutex.
///
/// Every critical section leaves the map in a consistent state (single
/// insert/update), so the data behind a poisoned lock is still valid.
pub(crate) fn relock<'a, T>(result: LockResult<MutexGuard<'a, T>>) -> MutexGuard<'a, T> {
    result.unwrap_or_else(PoisonError::into_inner)
}
