//! Wishlist behavior over the full HTTP surface.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;
use serde_json::json;

use ecofinds_integration_tests::TestContext;

async fn create_product(ctx: &TestContext, token: &str, title: &str) -> String {
    let (status, body) = ctx
        .post(
            "/api/v1/products",
            Some(token),
            Some(json!({
                "title": title,
                "description": "nice",
                "price": 10.0,
                "category": "home",
                "condition": "good",
                "material": "bamboo",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    body["product"]["id"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn test_wishlist_requires_auth() {
    let ctx = TestContext::new();

    let (status, _) = ctx.get("/api/v1/wishlist", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = ctx
        .post(
            "/api/v1/wishlist/5f2b9a54-9c2e-4bcb-8f10-6a3f1d2c4e5b",
            None,
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(ctx.store().is_empty());
}

#[tokio::test]
async fn test_add_list_remove_roundtrip() {
    let ctx = TestContext::new();
    let (_, token) = ctx.signed_up_user("Ada").await;
    let product_id = create_product(&ctx, &token, "Lamp").await;

    let (status, body) = ctx
        .post(&format!("/api/v1/wishlist/{product_id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = ctx.get("/api/v1/wishlist", Some(&token)).await;
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["id"], json!(product_id));

    let (status, body) = ctx
        .delete(&format!("/api/v1/wishlist/{product_id}"), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = ctx.get("/api/v1/wishlist", Some(&token)).await;
    assert!(body["products"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_remove_absent_entry_still_succeeds() {
    let ctx = TestContext::new();
    let (_, token) = ctx.signed_up_user("Ada").await;

    let (status, body) = ctx
        .delete(
            "/api/v1/wishlist/5f2b9a54-9c2e-4bcb-8f10-6a3f1d2c4e5b",
            Some(&token),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_malformed_product_id_is_400_json() {
    let ctx = TestContext::new();
    let (_, token) = ctx.signed_up_user("Ada").await;

    let (status, body) = ctx
        .post("/api/v1/wishlist/not-a-uuid", Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_wishlists_are_per_user() {
    let ctx = TestContext::new();
    let (_, ada) = ctx.signed_up_user("Ada").await;
    let (_, bob) = ctx.signed_up_user("Bob").await;
    let product_id = create_product(&ctx, &ada, "Lamp").await;

    ctx.post(&format!("/api/v1/wishlist/{product_id}"), Some(&ada), None)
        .await;

    let (_, body) = ctx.get("/api/v1/wishlist", Some(&bob)).await;
    assert!(body["products"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_dangling_entry_dropped_from_listing() {
    let ctx = TestContext::new();
    let (_, token) = ctx.signed_up_user("Ada").await;

    // Wishlist a product that was never created
    let (status, _) = ctx
        .post(
            "/api/v1/wishlist/5f2b9a54-9c2e-4bcb-8f10-6a3f1d2c4e5b",
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = ctx.get("/api/v1/wishlist", Some(&token)).await;
    assert!(body["products"].as_array().unwrap().is_empty());
}
