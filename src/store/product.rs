//! Product entity accessor
//!
//! Binds CRUD operations to the `products` table. All queries are
//! parameter-bound; nothing caller-supplied is concatenated into SQL.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// A product row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock_quantity: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// The writable fields of a product, as used by create and update
#[derive(Debug, Clone)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock_quantity: i64,
}

const SELECT_COLUMNS: &str =
    "SELECT id, name, description, price, category, stock_quantity, created_at, updated_at \
     FROM products";

/// Per-request accessor for the `products` table
pub struct ProductStore {
    pool: SqlitePool,
}

impl ProductStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All products, newest first
    pub async fn read_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Product>(&query).fetch_all(&self.pool).await
    }

    /// Fetch one product by id; absence is `None`, not an error
    pub async fn read_one(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("{SELECT_COLUMNS} WHERE id = ? LIMIT 1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// All products whose `category` text equals the given category name,
    /// newest first. The match is by text, not by foreign key.
    pub async fn read_by_category(&self, category: &str) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("{SELECT_COLUMNS} WHERE category = ? ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Product>(&query)
            .bind(category)
            .fetch_all(&self.pool)
            .await
    }

    /// Insert a new product and return the store-assigned id
    pub async fn create(&self, fields: &ProductFields) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO products (name, description, price, category, stock_quantity) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.price)
        .bind(&fields.category)
        .bind(fields.stock_quantity)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Overwrite all writable fields of a product.
    ///
    /// Success means the statement executed, not that a row changed;
    /// callers check existence beforehand. An update against a vanished id
    /// therefore still reports success.
    pub async fn update(&self, id: i64, fields: &ProductFields) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE products \
             SET name = ?, description = ?, price = ?, category = ?, stock_quantity = ?, \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = ?",
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.price)
        .bind(&fields.category)
        .bind(fields.stock_quantity)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a product. Same success semantics as [`update`](Self::update).
    pub async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
