//! Integration tests for FashionHub.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fashionhub-integration-tests
//! ```
//!
//! Tests drive the real storefront router in-process via `tower::ServiceExt`,
//! so no server or database needs to be running. Each [`TestApp`] owns a
//! fresh `AppState` (seeded catalog, empty stores), giving every test an
//! isolated storefront.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use fashionhub_storefront::config::StorefrontConfig;
use fashionhub_storefront::routes;
use fashionhub_storefront::state::AppState;

/// An in-process storefront instance for tests.
///
/// The router is cloned per request; all clones share the same `AppState`,
/// so carts and orders persist across requests within one `TestApp`.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Spawn a fresh storefront with the built-in catalog and empty stores.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(StorefrontConfig::default());
        Self {
            router: routes::app(state),
        }
    }

    /// Spawn a storefront over an explicit catalog.
    #[must_use]
    pub fn with_catalog(catalog: fashionhub_storefront::catalog::Catalog) -> Self {
        let state = AppState::with_catalog(StorefrontConfig::default(), catalog);
        Self {
            router: routes::app(state),
        }
    }

    /// Send a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("GET")
                .uri(path)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(path)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
    }

    /// Send a POST request with a JSON body.
    pub async fn post_json(&self, path: &str, body: &Value) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("build request"),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");

        TestResponse { status, bytes }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// A buffered response from the storefront.
pub struct TestResponse {
    pub status: StatusCode,
    bytes: axum::body::Bytes,
}

impl TestResponse {
    /// Parse the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).expect("response body is JSON")
    }

    /// The body as text.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}
