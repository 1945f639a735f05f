//! Category HTTP Routes
//!
//! Read-only `/categories` resource: the full listing, plus a
//! category-scoped product listing selected by the bare `products` query
//! marker and a `category_id`.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::api::{ApiError, ApiResponse, ApiResult};
use crate::store::{CategoryStore, ProductStore};

use super::params;
use super::server::AppState;

/// Build the `/categories` router
pub fn category_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/categories",
            get(read_categories).fallback(method_not_allowed),
        )
        .with_state(state)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// GET /categories, GET /categories?products&category_id=N
///
/// A `category_id` that fails strict positive-integer validation is
/// treated as absent: the handler falls back to the full category listing
/// instead of erroring.
async fn read_categories(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Response> {
    let wants_products = query.contains_key("products");
    let category_id = query.get("category_id").and_then(|raw| params::strict_id(raw));

    if wants_products {
        if let Some(id) = category_id {
            let category = CategoryStore::new(state.pool.clone())
                .read_one(id)
                .await?
                .ok_or(ApiError::NotFound("Category not found"))?;

            let products = ProductStore::new(state.pool.clone())
                .read_by_category(&category.name)
                .await?;

            return Ok(
                Json(ApiResponse::list_in_category(products, category.name)).into_response()
            );
        }
    }

    let categories = CategoryStore::new(state.pool.clone()).read_all().await?;
    Ok(Json(ApiResponse::list(categories)).into_response())
}
