//! In-process HTTP tests for the full router.
//!
//! Requests go through every middleware layer via `tower::ServiceExt::oneshot`
//! against an in-memory store and a clock pinned to 2024-06-15.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use chrono::NaiveDate;
use serde_json::{Value, json};
use tower::ServiceExt;

use arukay_api::{
    AppState, app,
    clock::FixedClock,
    config::ApiConfig,
    db::InMemoryUserStore,
    middleware::REQUEST_ID_HEADER,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn test_app_with(config: ApiConfig) -> Router {
    let state = AppState::new(
        config,
        Arc::new(InMemoryUserStore::new()),
        Arc::new(FixedClock(today())),
    );
    app(state)
}

fn test_app() -> Router {
    test_app_with(ApiConfig::default())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn ana() -> Value {
    json!({ "name": "Ana", "email": "ana@example.com", "birth_date": "2000-06-15" })
}

#[tokio::test]
async fn test_banner() {
    let response = send(&test_app(), get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["cors_enabled"], true);
    assert!(body["message"].as_str().unwrap().contains("Arukay API"));
}

#[tokio::test]
async fn test_health_and_readiness() {
    let app = test_app();

    let response = send(&app, get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"ok");

    let response = send(&app, get("/health/ready")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_user_returns_201_with_age() {
    let response = send(&test_app(), post_json("/users", &ana())).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["email"], "ana@example.com");
    assert_eq!(body["birth_date"], "2000-06-15");
    assert_eq!(body["age"], 24);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_duplicate_email_is_409_with_detail() {
    let app = test_app();
    assert_eq!(send(&app, post_json("/users", &ana())).await.status(), StatusCode::CREATED);

    let response = send(&app, post_json("/users", &ana())).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await,
        json!({ "detail": "Email already registered" })
    );

    let listed = body_json(send(&app, get("/users")).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_fields_are_422() {
    let app = test_app();

    let bad_email = json!({ "name": "Ana", "email": "nope", "birth_date": "2000-01-01" });
    let response = send(&app, post_json("/users", &bad_email)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["detail"].is_string());

    let blank_name = json!({ "name": "  ", "email": "ana@example.com", "birth_date": "2000-01-01" });
    let response = send(&app, post_json("/users", &blank_name)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bad_date = json!({ "name": "Ana", "email": "ana@example.com", "birth_date": "15/06/2000" });
    let response = send(&app, post_json("/users", &bad_date)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["detail"].is_string());
}

#[tokio::test]
async fn test_email_domain_case_does_not_bypass_uniqueness() {
    let app = test_app();
    assert_eq!(send(&app, post_json("/users", &ana())).await.status(), StatusCode::CREATED);

    let shouted = json!({ "name": "Ana", "email": "ana@EXAMPLE.COM", "birth_date": "2000-06-15" });
    let response = send(&app, post_json("/users", &shouted)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let listed = body_json(send(&app, get("/users")).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_created_email_has_lowercased_domain() {
    let body = json!({ "name": "Ana", "email": "Ana@Example.Com", "birth_date": "2000-06-15" });
    let response = send(&test_app(), post_json("/users", &body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["email"], "Ana@example.com");
}

#[tokio::test]
async fn test_emails_with_empty_labels_are_422() {
    let app = test_app();
    for email in ["ana@example..com", ".ana@example.com", "ana.@example.com", "a..na@example.com"] {
        let body = json!({ "name": "Ana", "email": email, "birth_date": "2000-06-15" });
        let response = send(&app, post_json("/users", &body)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{email}");
    }
    assert_eq!(send(&app, get("/users")).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = send(&test_app(), request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["detail"].is_string());
}

#[tokio::test]
async fn test_list_empty_is_404() {
    let response = send(&test_app(), get("/users")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "detail": "No users found" }));
}

#[tokio::test]
async fn test_list_returns_all_users_with_ages() {
    let app = test_app();
    send(&app, post_json("/users", &ana())).await;
    send(
        &app,
        post_json(
            "/users",
            &json!({ "name": "Luis", "email": "luis@example.com", "birth_date": "2000-06-16" }),
        ),
    )
    .await;

    let response = send(&app, get("/users")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["name"], "Ana");
    assert_eq!(users[0]["age"], 24);
    assert_eq!(users[1]["name"], "Luis");
    assert_eq!(users[1]["age"], 23);
}

#[tokio::test]
async fn test_delete_user() {
    let app = test_app();
    send(&app, post_json("/users", &ana())).await;

    let response = send(&app, delete("/users/1")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    assert_eq!(send(&app, get("/users")).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_is_404_and_keeps_others() {
    let app = test_app();
    send(&app, post_json("/users", &ana())).await;

    let response = send(&app, delete("/users/99")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "detail": "User not found" }));

    let listed = body_json(send(&app, get("/users")).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_out_of_range_id_is_404() {
    let app = test_app();
    for uri in ["/users/99999999999", "/users/-99999999999"] {
        let response = send(&app, delete(uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body_json(response).await, json!({ "detail": "User not found" }));
    }
}

#[tokio::test]
async fn test_delete_non_numeric_id_is_400() {
    let response = send(&test_app(), delete("/users/abc")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["detail"].is_string());
}

#[tokio::test]
async fn test_normal_function_default_and_custom_n() {
    let app = test_app();

    let body = body_json(send(&app, get("/normal_function")).await).await;
    let values = body.as_array().unwrap();
    assert_eq!(values.len(), 1000);
    assert_eq!(values[0], 0);
    assert_eq!(values[999], 999);

    let body = body_json(send(&app, get("/normal_function?n=3")).await).await;
    assert_eq!(body, json!([0, 1, 2]));

    let body = body_json(send(&app, get("/normal_function?n=0")).await).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_generator_function_counts() {
    let app = test_app();

    let body = body_json(send(&app, get("/generator_function")).await).await;
    assert_eq!(body["count"], 1_000_000);
    assert_eq!(body["message"], "Generator completed");

    let body = body_json(send(&app, get("/generator_function?n=5")).await).await;
    assert_eq!(body["count"], 5);
}

#[tokio::test]
async fn test_generator_stream_matches_eager_run() {
    let app = test_app();

    let response = send(&app, get("/generator_function/stream?n=5")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/x-ndjson"
    );
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    let streamed: Vec<u64> = text.lines().map(|l| l.parse().unwrap()).collect();

    let eager: Vec<u64> =
        serde_json::from_value(body_json(send(&app, get("/normal_function?n=5")).await).await)
            .unwrap();
    assert_eq!(streamed, eager);
}

#[tokio::test]
async fn test_sequence_limit_and_bad_n() {
    let config = ApiConfig {
        sequence_limit: 10,
        ..ApiConfig::default()
    };
    let app = test_app_with(config);

    for uri in [
        "/normal_function?n=11",
        "/generator_function?n=11",
        "/generator_function/stream?n=11",
        "/normal_function?n=-1",
        "/normal_function?n=lots",
    ] {
        let response = send(&app, get(uri)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert!(body_json(response).await["detail"].is_string(), "{uri}");
    }

    assert_eq!(send(&app, get("/normal_function?n=10")).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_preflight_from_configured_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/users")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = send(&test_app(), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:5173"
    );
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}

#[tokio::test]
async fn test_every_response_has_request_id() {
    let app = test_app();
    for request in [get("/"), get("/users"), get("/nowhere"), delete("/users/5")] {
        let response = send(&app, request).await;
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }
}
