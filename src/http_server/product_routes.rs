//! Product HTTP Routes
//!
//! The `/products` resource: method-dispatched CRUD with the product
//! identifier carried as the `id` query parameter. Envelope shapes and
//! error messages are part of the wire contract the admin client consumes.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::api::{ApiError, ApiResponse, ApiResult};
use crate::sanitize;
use crate::store::{ProductFields, ProductStore};

use super::params;
use super::server::AppState;

/// Fields echoed back after a create or update.
///
/// Timestamps are deliberately absent: mutations echo what was written,
/// not a re-read of the row.
#[derive(Debug, Serialize)]
struct ProductBody {
    id: i64,
    name: String,
    description: String,
    price: f64,
    category: String,
    stock_quantity: i64,
}

impl ProductBody {
    fn new(id: i64, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            stock_quantity: fields.stock_quantity,
        }
    }
}

/// Build the `/products` router
pub fn product_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/products",
            get(read_products)
                .post(create_product)
                .put(update_product)
                .delete(delete_product)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// The usable product id from the query string, if any.
///
/// An `id` that fails lenient positive-integer coercion counts as absent,
/// so `GET /products?id=abc` lists everything rather than erroring.
fn product_id(query: &HashMap<String, String>) -> Option<i64> {
    query.get("id").and_then(|raw| params::lenient_id(raw))
}

/// GET /products, GET /products?id=N
async fn read_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Response> {
    let store = ProductStore::new(state.pool.clone());

    match product_id(&query) {
        Some(id) => {
            let product = store
                .read_one(id)
                .await?
                .ok_or(ApiError::NotFound("Product not found"))?;
            Ok(Json(ApiResponse::with_message(
                product,
                "Product retrieved successfully",
            ))
            .into_response())
        }
        None => {
            let products = store.read_all().await?;
            Ok(Json(ApiResponse::list(products)).into_response())
        }
    }
}

/// POST /products
async fn create_product(
    State(state): State<Arc<AppState>>,
    body: Option<Json<Value>>,
) -> ApiResult<Response> {
    let body = body.map(|Json(v)| v).unwrap_or(Value::Null);

    if params::is_blank(body.get("name")) || params::is_blank(body.get("price")) {
        return Err(ApiError::Validation("Name and price are required fields"));
    }

    let fields = ProductFields {
        name: sanitize::clean(&params::as_text(&body["name"])),
        description: params::present(body.get("description"))
            .map(|v| sanitize::clean(&params::as_text(v)))
            .unwrap_or_default(),
        price: params::as_float(&body["price"]),
        category: params::present(body.get("category"))
            .map(|v| sanitize::clean(&params::as_text(v)))
            .unwrap_or_default(),
        stock_quantity: params::present(body.get("stock_quantity"))
            .map(params::as_int)
            .unwrap_or(0),
    };

    let store = ProductStore::new(state.pool.clone());
    let id = store
        .create(&fields)
        .await
        .map_err(|e| ApiError::storage("Failed to create product", e))?;

    tracing::info!(id, name = %fields.name, "product created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            ProductBody::new(id, fields),
            "Product created successfully",
        )),
    )
        .into_response())
}

/// PUT /products?id=N
///
/// Partial update: body fields that are present overwrite, omitted or
/// null fields keep their prior values.
async fn update_product(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
    body: Option<Json<Value>>,
) -> ApiResult<Response> {
    let id = product_id(&query).ok_or(ApiError::Validation("Product ID is required"))?;

    let store = ProductStore::new(state.pool.clone());
    let existing = store
        .read_one(id)
        .await?
        .ok_or(ApiError::NotFound("Product not found"))?;

    let body = body.map(|Json(v)| v).unwrap_or(Value::Null);

    let fields = ProductFields {
        name: params::present(body.get("name"))
            .map(|v| sanitize::clean(&params::as_text(v)))
            .unwrap_or(existing.name),
        description: params::present(body.get("description"))
            .map(|v| sanitize::clean(&params::as_text(v)))
            .unwrap_or(existing.description),
        price: params::present(body.get("price"))
            .map(params::as_float)
            .unwrap_or(existing.price),
        category: params::present(body.get("category"))
            .map(|v| sanitize::clean(&params::as_text(v)))
            .unwrap_or(existing.category),
        stock_quantity: params::present(body.get("stock_quantity"))
            .map(params::as_int)
            .unwrap_or(existing.stock_quantity),
    };

    store
        .update(id, &fields)
        .await
        .map_err(|e| ApiError::storage("Failed to update product", e))?;

    tracing::info!(id, "product updated");

    Ok(Json(ApiResponse::with_message(
        ProductBody::new(id, fields),
        "Product updated successfully",
    ))
    .into_response())
}

/// DELETE /products?id=N
async fn delete_product(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Response> {
    let id = product_id(&query).ok_or(ApiError::Validation("Product ID is required"))?;

    let store = ProductStore::new(state.pool.clone());
    store
        .read_one(id)
        .await?
        .ok_or(ApiError::NotFound("Product not found"))?;

    store
        .delete(id)
        .await
        .map_err(|e| ApiError::storage("Failed to delete product", e))?;

    tracing::info!(id, "product deleted");

    Ok(Json(ApiResponse::message("Product deleted successfully")).into_response())
}
