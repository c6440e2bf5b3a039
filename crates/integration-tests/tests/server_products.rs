//! Product catalog behavior over the full HTTP surface.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;
use serde_json::{Value, json};

use ecofinds_integration_tests::TestContext;

fn listing(title: &str, category: &str) -> Value {
    json!({
        "title": title,
        "description": format!("{title} in good shape"),
        "price": 25.0,
        "category": category,
        "condition": "good",
        "material": "cotton",
    })
}

#[tokio::test]
async fn test_create_requires_auth() {
    let ctx = TestContext::new();

    let (status, _) = ctx
        .post("/api/v1/products", None, Some(listing("Jacket", "clothing")))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(ctx.store().is_empty());
}

#[tokio::test]
async fn test_create_scores_and_awards_points() {
    let ctx = TestContext::new();
    let (_, token) = ctx.signed_up_user("Ada").await;

    let (status, body) = ctx
        .post(
            "/api/v1/products",
            Some(&token),
            Some(listing("Jacket", "clothing")),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    // cotton + good = 50 + 15 + 15
    assert_eq!(body["product"]["ecoScore"], 80);
    assert_eq!(body["product"]["views"], 0);

    let (_, body) = ctx.get("/api/v1/user/profile", Some(&token)).await;
    assert_eq!(body["profile"]["ecoPoints"], 10);
}

#[tokio::test]
async fn test_create_rejects_bad_payload() {
    let ctx = TestContext::new();
    let (_, token) = ctx.signed_up_user("Ada").await;

    let mut bad = listing("", "clothing");
    bad["price"] = json!(-5.0);
    let (status, body) = ctx.post("/api/v1/products", Some(&token), Some(bad)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_list_is_public_and_filtered() {
    let ctx = TestContext::new();
    let (_, token) = ctx.signed_up_user("Ada").await;

    ctx.post(
        "/api/v1/products",
        Some(&token),
        Some(listing("Vintage Jacket", "clothing")),
    )
    .await;
    ctx.post(
        "/api/v1/products",
        Some(&token),
        Some(listing("Desk Lamp", "home")),
    )
    .await;

    let (status, body) = ctx.get("/api/v1/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"].as_array().unwrap().len(), 2);

    let (_, body) = ctx.get("/api/v1/products?category=clothing", None).await;
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["category"], "clothing");

    // "all" disables the category filter
    let (_, body) = ctx.get("/api/v1/products?category=all", None).await;
    assert_eq!(body["products"].as_array().unwrap().len(), 2);

    // Search matches title/description case-insensitively
    let (_, body) = ctx.get("/api/v1/products?search=vintage", None).await;
    assert_eq!(body["products"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_detail_increments_views_and_resolves_seller() {
    let ctx = TestContext::new();
    let (identity, token) = ctx.signed_up_user("Ada").await;

    let (_, body) = ctx
        .post(
            "/api/v1/products",
            Some(&token),
            Some(listing("Jacket", "clothing")),
        )
        .await;
    let id = body["product"]["id"].as_str().unwrap().to_owned();

    let path = format!("/api/v1/products/{id}");
    let (status, first) = ctx.get(&path, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["product"]["views"], 1);

    let (_, second) = ctx.get(&path, None).await;
    assert_eq!(second["product"]["views"], 2);

    assert_eq!(second["seller"]["id"], json!(identity.id));
    // Reduced projection only
    assert!(second["seller"].get("email").is_none());
}

#[tokio::test]
async fn test_detail_unknown_product_is_404() {
    let ctx = TestContext::new();

    let (status, body) = ctx
        .get(
            "/api/v1/products/5f2b9a54-9c2e-4bcb-8f10-6a3f1d2c4e5b",
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "product not found");
    assert!(ctx.store().is_empty());
}

#[tokio::test]
async fn test_detail_unparseable_id_behaves_like_absent() {
    let ctx = TestContext::new();

    let (status, body) = ctx.get("/api/v1/products/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "product not found");
    assert!(ctx.store().is_empty());
}

#[tokio::test]
async fn test_seed_writes_demo_catalog() {
    let ctx = TestContext::new();

    let (status, body) = ctx.post("/api/v1/seed-products", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 8);
    assert_eq!(body["message"], "Products seeded successfully");

    let (_, body) = ctx.get("/api/v1/products", None).await;
    assert_eq!(body["products"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_user_products_lists_only_own() {
    let ctx = TestContext::new();
    let (_, ada) = ctx.signed_up_user("Ada").await;
    let (_, bob) = ctx.signed_up_user("Bob").await;

    ctx.post(
        "/api/v1/products",
        Some(&ada),
        Some(listing("Jacket", "clothing")),
    )
    .await;
    ctx.post(
        "/api/v1/products",
        Some(&bob),
        Some(listing("Lamp", "home")),
    )
    .await;

    let (status, body) = ctx.get("/api/v1/user/products", Some(&ada)).await;
    assert_eq!(status, StatusCode::OK);
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["title"], "Jacket");
}
