//! Integration tests for the sequence endpoints.
//!
//! Run with: cargo test -p arukay-integration-tests -- --ignored

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;

use arukay_integration_tests::{GeneratorSummary, TestContext};

#[tokio::test]
#[ignore = "requires a running server"]
async fn test_normal_function_default() {
    let ctx = TestContext::new();
    let values: Vec<u64> = ctx
        .client
        .get(ctx.url("/normal_function"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(values, (0..1000).collect::<Vec<u64>>());
}

#[tokio::test]
#[ignore = "requires a running server"]
async fn test_generator_function_default() {
    let ctx = TestContext::new();
    let summary: GeneratorSummary = ctx
        .client
        .get(ctx.url("/generator_function"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(summary.count, 1_000_000);
}

#[tokio::test]
#[ignore = "requires a running server"]
async fn test_stream_matches_eager() {
    let ctx = TestContext::new();
    let resp = ctx
        .client
        .get(ctx.url("/generator_function/stream?n=100"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let text = resp.text().await.unwrap();
    let streamed: Vec<u64> = text.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(streamed, (0..100).collect::<Vec<u64>>());
}
