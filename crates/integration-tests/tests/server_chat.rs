//! Direct messaging behavior over the full HTTP surface.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;
use serde_json::json;

use ecofinds_integration_tests::TestContext;

#[tokio::test]
async fn test_send_requires_auth() {
    let ctx = TestContext::new();

    let (status, _) = ctx
        .post(
            "/api/v1/chat/message",
            None,
            Some(json!({
                "recipientId": "5f2b9a54-9c2e-4bcb-8f10-6a3f1d2c4e5b",
                "message": "hello",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(ctx.store().is_empty());
}

#[tokio::test]
async fn test_send_then_fetch_conversation() {
    let ctx = TestContext::new();
    let (ada, ada_token) = ctx.signed_up_user("Ada").await;
    let (bob, bob_token) = ctx.signed_up_user("Bob").await;

    let (status, body) = ctx
        .post(
            "/api/v1/chat/message",
            Some(&ada_token),
            Some(json!({
                "recipientId": bob.id,
                "message": "is the lamp still available?",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"]["senderId"], json!(ada.id));
    assert_eq!(body["message"]["read"], false);

    ctx.post(
        "/api/v1/chat/message",
        Some(&bob_token),
        Some(json!({
            "recipientId": ada.id,
            "message": "yes it is",
        })),
    )
    .await;

    // Both sides see the same two messages, oldest first
    let (status, ada_view) = ctx
        .get(&format!("/api/v1/chat/{}", bob.id), Some(&ada_token))
        .await;
    assert_eq!(status, StatusCode::OK);
    let messages = ada_view["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["message"], "is the lamp still available?");
    assert_eq!(messages[1]["message"], "yes it is");

    let (_, bob_view) = ctx
        .get(&format!("/api/v1/chat/{}", ada.id), Some(&bob_token))
        .await;
    assert_eq!(bob_view["messages"], ada_view["messages"]);
}

#[tokio::test]
async fn test_malformed_recipient_id_is_400_json() {
    let ctx = TestContext::new();
    let (_, token) = ctx.signed_up_user("Ada").await;

    let (status, body) = ctx
        .post(
            "/api/v1/chat/message",
            Some(&token),
            Some(json!({
                "recipientId": "not-a-uuid",
                "message": "hello",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_conversation_excludes_third_parties() {
    let ctx = TestContext::new();
    let (_, ada_token) = ctx.signed_up_user("Ada").await;
    let (bob, _) = ctx.signed_up_user("Bob").await;
    let (carol, _) = ctx.signed_up_user("Carol").await;

    ctx.post(
        "/api/v1/chat/message",
        Some(&ada_token),
        Some(json!({ "recipientId": bob.id, "message": "for bob" })),
    )
    .await;
    ctx.post(
        "/api/v1/chat/message",
        Some(&ada_token),
        Some(json!({ "recipientId": carol.id, "message": "for carol" })),
    )
    .await;

    let (_, body) = ctx
        .get(&format!("/api/v1/chat/{}", bob.id), Some(&ada_token))
        .await;
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["message"], "for bob");
}

#[tokio::test]
async fn test_message_may_reference_product() {
    let ctx = TestContext::new();
    let (_, ada_token) = ctx.signed_up_user("Ada").await;
    let (bob, _) = ctx.signed_up_user("Bob").await;

    let (status, body) = ctx
        .post(
            "/api/v1/chat/message",
            Some(&ada_token),
            Some(json!({
                "recipientId": bob.id,
                "message": "about this listing",
                "productId": "5f2b9a54-9c2e-4bcb-8f10-6a3f1d2c4e5b",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"]["productId"],
        "5f2b9a54-9c2e-4bcb-8f10-6a3f1d2c4e5b"
    );
}
