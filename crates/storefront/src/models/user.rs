//! User domain types.
//!
//! Authentication is out of scope: a single fixed test user stands in for a
//! real session. Identity is still threaded explicitly as a `UserId` through
//! every store call, so wiring in real sessions later does not change the
//! store contracts.

use serde::{Deserialize, Serialize};

use fashionhub_core::UserId;

/// A storefront user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    /// The fixed test user that simulates an authenticated session.
    #[must_use]
    pub fn test_user() -> Self {
        Self {
            id: UserId::new("user-1"),
            name: "Test User".to_string(),
            email: "test@fashionhub.com".to_string(),
        }
    }
}
