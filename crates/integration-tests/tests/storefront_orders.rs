//! Integration tests for checkout and order history.

use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use serde_json::{Value, json};

use fashionhub_core::{Price, ProductCategory, ProductId};
use fashionhub_integration_tests::TestApp;
use fashionhub_storefront::catalog::Catalog;
use fashionhub_storefront::models::{Product, ProductColor};

fn delivery_details() -> Value {
    json!({
        "deliveryAddress": {
            "address": "1 Main St",
            "city": "Springfield",
            "zipCode": "12345",
            "country": "US"
        },
        "paymentMethod": "card-visa"
    })
}

fn parse_time(value: &Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().expect("timestamp string"))
        .expect("valid RFC 3339")
        .with_timezone(&Utc)
}

#[tokio::test]
async fn test_checkout_with_empty_cart_is_400_and_creates_no_order() {
    let app = TestApp::new();
    let resp = app.post_json("/api/orders", &delivery_details()).await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json()["error"], "Cart is empty");

    let orders = app.get("/api/orders").await.json();
    assert_eq!(orders, json!([]));
}

#[tokio::test]
async fn test_checkout_with_missing_payment_method_is_400() {
    let app = TestApp::new();
    app.post_json(
        "/api/cart",
        &json!({"productId": "1", "size": "M", "color": "Navy"}),
    )
    .await;

    let resp = app
        .post_json(
            "/api/orders",
            &json!({"deliveryAddress": {"address": "1 Main St", "city": "Springfield"}}),
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json()["error"], "Missing required fields");

    // Fail-closed: the cart is untouched
    let cart = app.get("/api/cart").await.json();
    assert_eq!(cart["items"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_checkout_confirms_order_and_clears_cart() {
    let app = TestApp::new();
    // Product 1 costs 257.85; two units plus the 12.00 fee
    app.post_json(
        "/api/cart",
        &json!({"productId": "1", "size": "M", "color": "Navy", "quantity": 2}),
    )
    .await;

    let resp = app.post_json("/api/orders", &delivery_details()).await;

    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Order created successfully");

    let order = &body["order"];
    assert_eq!(order["userId"], "user-1");
    assert_eq!(order["status"], "confirmed");
    assert_eq!(order["subtotal"], "515.70");
    assert_eq!(order["deliveryFee"], "12.00");
    assert_eq!(order["total"], "527.70");
    assert_eq!(order["paymentMethod"], "card-visa");
    assert_eq!(order["deliveryAddress"]["zipCode"], "12345");
    assert_eq!(order["items"].as_array().map(Vec::len), Some(1));

    let created_at = parse_time(&order["createdAt"]);
    let delivery_date = parse_time(&order["deliveryDate"]);
    assert_eq!(delivery_date - created_at, Duration::days(7));

    // Cart is emptied, not deleted
    let cart = app.get("/api/cart").await.json();
    assert_eq!(cart["items"], json!([]));

    // And the order shows up in history
    let orders = app.get("/api/orders").await.json();
    let orders = orders.as_array().expect("array");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders.first().expect("order")["id"], order["id"]);
}

#[tokio::test]
async fn test_checkout_worked_example() {
    // One item at 100.00, quantity 2: subtotal 200.00, total 212.00
    let catalog = Catalog::new(vec![Product {
        id: ProductId::new("p-100"),
        name: "Plain Tee".to_string(),
        description: "A plain tee".to_string(),
        price: Price::from_cents(10000),
        category: ProductCategory::Other,
        images: vec!["https://example.com/tee.jpg".to_string()],
        sizes: vec!["M".to_string()],
        colors: vec![ProductColor {
            name: "White".to_string(),
            value: "#FFFFFF".to_string(),
            image: None,
        }],
        stock: 10,
    }]);
    let app = TestApp::with_catalog(catalog);

    app.post_json(
        "/api/cart",
        &json!({"productId": "p-100", "size": "M", "color": "White", "quantity": 2}),
    )
    .await;
    let resp = app.post_json("/api/orders", &delivery_details()).await;

    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.json();
    let order = &body["order"];
    assert_eq!(order["subtotal"], "200.00");
    assert_eq!(order["total"], "212.00");
}

#[tokio::test]
async fn test_orders_accumulate_in_creation_order() {
    let app = TestApp::new();

    for product_id in ["1", "2"] {
        app.post_json(
            "/api/cart",
            &json!({"productId": product_id, "size": "S", "color": "Any"}),
        )
        .await;
        let resp = app.post_json("/api/orders", &delivery_details()).await;
        assert_eq!(resp.status, StatusCode::OK);
    }

    let orders = app.get("/api/orders").await.json();
    let orders = orders.as_array().expect("array");
    assert_eq!(orders.len(), 2);
    assert_eq!(orders.first().expect("first")["items"][0]["productId"], "1");
    assert_eq!(orders.get(1).expect("second")["items"][0]["productId"], "2");
}
