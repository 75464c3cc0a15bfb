//! Integration tests for the product catalog endpoints.

use axum::http::StatusCode;

use fashionhub_integration_tests::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let resp = app.get("/health").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.text(), "ok");
}

#[tokio::test]
async fn test_list_all_products() {
    let app = TestApp::new();
    let resp = app.get("/api/products").await;

    assert_eq!(resp.status, StatusCode::OK);
    let products = resp.json();
    let products = products.as_array().expect("array");
    assert_eq!(products.len(), 5);

    // Wire format is camelCase with decimal-string prices
    let first = products.first().expect("first product");
    assert_eq!(first["id"], "1");
    assert_eq!(first["name"], "Premium Tagerine Shirt");
    assert_eq!(first["price"], "257.85");
    assert_eq!(first["category"], "men");
    assert!(first["sizes"].as_array().is_some_and(|s| !s.is_empty()));
}

#[tokio::test]
async fn test_list_products_by_category() {
    let app = TestApp::new();
    let resp = app.get("/api/products?category=women").await;

    assert_eq!(resp.status, StatusCode::OK);
    let products = resp.json();
    let products = products.as_array().expect("array");
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p["category"] == "women"));
}

#[tokio::test]
async fn test_search_products() {
    let app = TestApp::new();
    let resp = app.get("/api/products?q=leather").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json().as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_search_combined_with_category() {
    let app = TestApp::new();
    let resp = app.get("/api/products?q=tagerine&category=women").await;

    assert_eq!(resp.status, StatusCode::OK);
    let products = resp.json();
    let products = products.as_array().expect("array");
    assert_eq!(products.len(), 1);
    assert_eq!(
        products.first().expect("product")["name"],
        "Leather Tagerine Court"
    );
}

#[tokio::test]
async fn test_product_detail() {
    let app = TestApp::new();
    let resp = app.get("/api/products/3").await;

    assert_eq!(resp.status, StatusCode::OK);
    let product = resp.json();
    assert_eq!(product["name"], "Leather Court");
    assert_eq!(product["price"], "325.36");
    assert_eq!(product["stock"], 20);
}

#[tokio::test]
async fn test_unknown_product_is_404() {
    let app = TestApp::new();
    let resp = app.get("/api/products/999").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.json()["error"], "Product not found");
}
