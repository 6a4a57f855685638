//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router with `tower::ServiceExt::oneshot`,
//! without a TCP listener.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use feed_api::auth::jwt::{generate_access_token, JwtConfig};
use feed_api::config::ServerConfig;
use feed_api::router::build_app_router;
use feed_api::state::AppState;
use feed_core::karma::KarmaPolicy;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        db_max_connections: 5,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
        },
        karma: KarmaPolicy::default(),
    }
}

/// Build the full application router over `pool`, with the production
/// middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Mint a bearer token for `user_id` signed with the test secret.
pub fn token_for(user_id: i64, username: &str) -> String {
    generate_access_token(user_id, username, &test_config().jwt).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

/// POST a raw, possibly malformed, JSON body.
pub async fn post_raw_auth(app: Router, uri: &str, token: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register a user over HTTP and return `(user_id, access_token)`.
pub async fn register(pool: &PgPool, username: &str) -> (i64, String) {
    let body = serde_json::json!({
        "username": username,
        "password": "long-enough-password",
        "password_confirm": "long-enough-password",
    });
    let response = post_json(build_test_app(pool.clone()), "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    (
        json["data"]["user"]["id"].as_i64().unwrap(),
        json["data"]["access_token"].as_str().unwrap().to_string(),
    )
}

/// Create a post over HTTP and return its id.
pub async fn create_post(pool: &PgPool, token: &str, content: &str) -> i64 {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/posts",
        token,
        serde_json::json!({ "content": content }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a comment over HTTP and return its id.
pub async fn create_comment(
    pool: &PgPool,
    token: &str,
    post_id: i64,
    parent_id: Option<i64>,
    content: &str,
) -> i64 {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/comments",
        token,
        serde_json::json!({ "post_id": post_id, "parent_id": parent_id, "content": content }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Toggle a like over HTTP.
pub async fn toggle(pool: &PgPool, token: &str, body: serde_json::Value) -> Response<Body> {
    post_json_auth(build_test_app(pool.clone()), "/api/v1/likes/toggle", token, body).await
}
