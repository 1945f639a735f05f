//! Relational Store
//!
//! Connection pool bootstrap, schema initialization, and the per-entity
//! accessors. Accessors are cheap request-scoped values over a cloned pool
//! handle; no entity state outlives a request.

mod category;
mod product;

pub use category::{Category, CategoryStore};
pub use product::{Product, ProductFields, ProductStore};

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

const PRODUCTS_SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    price REAL NOT NULL,
    category TEXT NOT NULL DEFAULT '',
    stock_quantity INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

const CATEGORIES_SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// Open the pool and make sure the schema exists.
///
/// An unreachable store fails here, before any routing exists.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

/// Create the product and category tables if they are missing.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(PRODUCTS_SCHEMA).execute(pool).await?;
    sqlx::query(CATEGORIES_SCHEMA).execute(pool).await?;
    Ok(())
}
