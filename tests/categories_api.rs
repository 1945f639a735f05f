//! /categories endpoint contract tests
//!
//! Covers the full listing, the category-scoped product listing, the
//! silent fallback on invalid identifiers, and the read-only method guard.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{seed_category, send, test_app};

#[tokio::test]
async fn test_list_categories_sorted_by_name() {
    let (app, pool) = test_app().await;
    seed_category(&pool, "Toys", "").await;
    seed_category(&pool, "Electronics", "Gadgets").await;
    seed_category(&pool, "Furniture", "").await;

    let (status, body) = send(&app, Method::GET, "/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Electronics", "Furniture", "Toys"]);

    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["per_page"], 3);
}

#[tokio::test]
async fn test_empty_listing_is_still_success() {
    let (app, _pool) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    assert_eq!(body["pagination"]["total"], 0);
}

#[tokio::test]
async fn test_products_scoped_to_category_by_name() {
    let (app, pool) = test_app().await;
    let electronics = seed_category(&pool, "Electronics", "").await;
    seed_category(&pool, "Toys", "").await;

    for (name, category) in [
        ("Phone", "Electronics"),
        ("Teddy", "Toys"),
        ("Laptop", "Electronics"),
    ] {
        send(
            &app,
            Method::POST,
            "/products",
            Some(json!({"name": name, "price": 10.0, "category": category})),
        )
        .await;
    }

    let uri = format!("/categories?products&category_id={electronics}");
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "Electronics");

    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    // Newest first, only the matching category
    assert_eq!(names, vec!["Laptop", "Phone"]);
    assert_eq!(body["pagination"]["total"], 2);
}

#[tokio::test]
async fn test_unknown_category_is_not_found() {
    let (app, _pool) = test_app().await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/categories?products&category_id=999999",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Category not found");
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_invalid_category_id_falls_back_to_listing() {
    let (app, pool) = test_app().await;
    seed_category(&pool, "Electronics", "").await;
    seed_category(&pool, "Toys", "").await;

    let (_, baseline) = send(&app, Method::GET, "/categories", None).await;

    for uri in [
        "/categories?products&category_id=0",
        "/categories?products&category_id=-1",
        "/categories?products&category_id=abc",
        "/categories?products&category_id=1.5",
        "/categories?products",
    ] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "uri: {uri}");
        assert_eq!(body, baseline, "uri: {uri}");
    }
}

#[tokio::test]
async fn test_category_rename_does_not_cascade() {
    // Association is by name text, not a foreign key: renaming the
    // category strands its products.
    let (app, pool) = test_app().await;
    let id = seed_category(&pool, "Electronics", "").await;

    send(
        &app,
        Method::POST,
        "/products",
        Some(json!({"name": "Phone", "price": 10.0, "category": "Electronics"})),
    )
    .await;

    sqlx::query("UPDATE categories SET name = 'Gadgets' WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();

    let uri = format!("/categories?products&category_id={id}");
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "Gadgets");
    assert_eq!(body["pagination"]["total"], 0);
}

#[tokio::test]
async fn test_non_get_methods_rejected() {
    let (app, _pool) = test_app().await;

    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let (status, body) = send(&app, method, "/categories", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["message"], "Method not allowed");
        assert_eq!(body["code"], 405);
    }
}
