//! # Product Repository
//!
//! CRUD operations for inventory products.
//!
//! ## Read-Time Join
//! Every SELECT joins `businesses` to fill `Product::business_name`.
//! The name is a display cache of the relational lookup, never stored
//! on the product row, so a renamed or deleted business is reflected
//! immediately.
//!
//! ## SKU Lookup
//! The `sku` column is `UNIQUE COLLATE NOCASE`: equality comparisons
//! are case-insensitive at the SQL level, matching the core crate's
//! upper-casing normalization.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use shelftrack_core::{validation, CoreError, NewProduct, Product};

use crate::error::{DbError, DbResult};

/// Shared SELECT clause: product columns plus the joined business name.
const PRODUCT_SELECT: &str = r#"
    SELECT p.id, p.name, p.sku, p.category, p.description,
           p.price_cents, p.current_stock, p.min_stock,
           p.business_id, b.name AS business_name,
           p.created_at, p.updated_at
    FROM products p
    LEFT JOIN businesses b ON b.id = p.business_id
"#;

/// Repository for product operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new product repository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Registers a new product from form input.
    ///
    /// Core-crate validation runs first (required fields, non-negative
    /// numbers, SKU normalization). A duplicate SKU surfaces as
    /// [`DbError::UniqueViolation`].
    pub async fn create(&self, input: NewProduct) -> DbResult<Product> {
        let product = Product::create(input).map_err(CoreError::from)?;

        sqlx::query(
            r#"
            INSERT INTO products
                (id, name, sku, category, description, price_cents,
                 current_stock, min_stock, business_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.sku)
        .bind(&product.category)
        .bind(&product.description)
        .bind(product.price_cents)
        .bind(product.current_stock)
        .bind(product.min_stock)
        .bind(&product.business_id)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        info!(id = %product.id, sku = %product.sku, "Product registered");

        // Re-read so business_name is resolved through the join
        self.get_by_id(&product.id).await
    }

    /// Gets a product by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Product> {
        let query = format!("{PRODUCT_SELECT} WHERE p.id = ?");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Product", id))
    }

    /// Gets a product by SKU (case-insensitive).
    pub async fn get_by_sku(&self, sku: &str) -> DbResult<Product> {
        let query = format!("{PRODUCT_SELECT} WHERE p.sku = ?");
        sqlx::query_as::<_, Product>(&query)
            .bind(sku)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Product", sku))
    }

    /// Lists all products, newest first.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let query = format!("{PRODUCT_SELECT} ORDER BY p.created_at DESC");
        let products = sqlx::query_as::<_, Product>(&query)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Lists products attached to a business, newest first.
    pub async fn list_by_business(&self, business_id: &str) -> DbResult<Vec<Product>> {
        let query = format!("{PRODUCT_SELECT} WHERE p.business_id = ? ORDER BY p.created_at DESC");
        let products = sqlx::query_as::<_, Product>(&query)
            .bind(business_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    /// Lists products at or below their minimum-stock threshold,
    /// including out-of-stock, most depleted first.
    pub async fn list_low_stock(&self) -> DbResult<Vec<Product>> {
        let query = format!(
            "{PRODUCT_SELECT} WHERE p.current_stock = 0 OR p.current_stock <= p.min_stock \
             ORDER BY p.current_stock ASC"
        );
        let products = sqlx::query_as::<_, Product>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    /// Updates a product's descriptive fields.
    ///
    /// Runs the same core-crate validation as `create` - an edit form
    /// must not persist values a registration form would reject - and
    /// re-normalizes the SKU.
    ///
    /// Deliberately does NOT write `current_stock`: stock only moves
    /// through the ledger so every change leaves a history row.
    pub async fn update(&self, product: &Product) -> DbResult<Product> {
        validation::validate_product_name(&product.name).map_err(CoreError::from)?;
        validation::validate_sku(&product.sku).map_err(CoreError::from)?;
        validation::validate_price_cents(product.price_cents).map_err(CoreError::from)?;
        validation::validate_stock_level("min_stock", product.min_stock)
            .map_err(CoreError::from)?;

        let sku = validation::normalize_sku(&product.sku);
        let updated_at = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?, sku = ?, category = ?, description = ?,
                price_cents = ?, min_stock = ?, business_id = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(product.name.trim())
        .bind(&sku)
        .bind(product.category.trim())
        .bind(&product.description)
        .bind(product.price_cents)
        .bind(product.min_stock)
        .bind(&product.business_id)
        .bind(updated_at)
        .bind(&product.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", &product.id));
        }

        info!(id = %product.id, "Product updated");
        self.get_by_id(&product.id).await
    }

    /// Deletes a product.
    ///
    /// Its stock history rows go with it (`ON DELETE CASCADE`).
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        info!(id = %id, "Product deleted");
        Ok(())
    }

    /// Total number of products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
