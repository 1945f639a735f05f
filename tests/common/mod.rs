//! Shared test harness: an in-memory store behind the real router.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use stockroom::config::ServerConfig;
use stockroom::http_server::HttpServer;
use stockroom::store;

/// In-memory SQLite pool with the schema applied.
///
/// A single connection, because every `:memory:` connection is its own
/// database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database opens");
    store::init_schema(&pool).await.expect("schema applies");
    pool
}

/// The full router over a fresh in-memory store.
pub async fn test_app() -> (Router, SqlitePool) {
    let pool = test_pool().await;
    let app = HttpServer::new(ServerConfig::default(), pool.clone()).router();
    (app, pool)
}

/// Send one request, get back status and parsed JSON body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Insert a category directly and return its id.
pub async fn seed_category(pool: &SqlitePool, name: &str, description: &str) -> i64 {
    sqlx::query("INSERT INTO categories (name, description) VALUES (?, ?)")
        .bind(name)
        .bind(description)
        .execute(pool)
        .await
        .expect("category inserts")
        .last_insert_rowid()
}
