//! Integration tests for the user endpoints.
//!
//! These tests require the API server running (cargo run -p arukay-api).
//!
//! Run with: cargo test -p arukay-integration-tests -- --ignored

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use serde_json::{Value, json};

use arukay_integration_tests::{TestContext, UserResponse, unique_email};

async fn create_user(ctx: &TestContext, email: &str) -> reqwest::Response {
    ctx.client
        .post(ctx.url("/users"))
        .json(&json!({ "name": "Integration", "email": email, "birth_date": "1990-01-01" }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "requires a running server"]
async fn test_health() {
    let ctx = TestContext::new();
    let resp = ctx.client.get(ctx.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
}

#[tokio::test]
#[ignore = "requires a running server"]
async fn test_user_lifecycle() {
    let ctx = TestContext::new();
    let email = unique_email();

    let resp = create_user(&ctx, &email).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: UserResponse = resp.json().await.unwrap();
    assert_eq!(created.email, email);
    assert!(created.age >= 34);

    let listed: Vec<UserResponse> = ctx
        .client
        .get(ctx.url("/users"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.iter().any(|u| u.id == created.id));

    let resp = ctx
        .client
        .delete(ctx.url(&format!("/users/{}", created.id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ctx
        .client
        .delete(ctx.url(&format!("/users/{}", created.id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running server"]
async fn test_duplicate_email_is_rejected() {
    let ctx = TestContext::new();
    let email = unique_email();

    let first = create_user(&ctx, &email).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let created: UserResponse = first.json().await.unwrap();

    let second = create_user(&ctx, &email).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body: Value = second.json().await.unwrap();
    assert!(body["detail"].is_string());

    let _ = ctx
        .client
        .delete(ctx.url(&format!("/users/{}", created.id)))
        .send()
        .await;
}
