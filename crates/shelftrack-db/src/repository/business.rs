//! # Business Repository
//!
//! CRUD operations for registered businesses.
//!
//! ## Deletion Semantics
//! Deleting a business *detaches* its products rather than removing
//! them: `products.business_id` is a weak reference with
//! `ON DELETE SET NULL`, so the inventory survives the business.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use shelftrack_core::{validation, Business, CoreError, NewBusiness};

use crate::error::{DbError, DbResult};

/// Repository for business operations.
#[derive(Debug, Clone)]
pub struct BusinessRepository {
    pool: SqlitePool,
}

impl BusinessRepository {
    /// Creates a new business repository.
    pub fn new(pool: SqlitePool) -> Self {
        BusinessRepository { pool }
    }

    /// Registers a new business from form input.
    ///
    /// Validation happens in the core crate before any row is written.
    pub async fn create(&self, input: NewBusiness) -> DbResult<Business> {
        let business = Business::create(input).map_err(CoreError::from)?;

        sqlx::query(
            r#"
            INSERT INTO businesses (id, name, owner, contact, category, address, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&business.id)
        .bind(&business.name)
        .bind(&business.owner)
        .bind(&business.contact)
        .bind(&business.category)
        .bind(&business.address)
        .bind(business.created_at)
        .bind(business.updated_at)
        .execute(&self.pool)
        .await?;

        info!(id = %business.id, name = %business.name, "Business registered");
        Ok(business)
    }

    /// Gets a business by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Business> {
        sqlx::query_as::<_, Business>("SELECT * FROM businesses WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Business", id))
    }

    /// Lists all businesses, newest first.
    pub async fn list(&self) -> DbResult<Vec<Business>> {
        let businesses =
            sqlx::query_as::<_, Business>("SELECT * FROM businesses ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        debug!(count = businesses.len(), "Listed businesses");
        Ok(businesses)
    }

    /// Updates a business's editable fields.
    ///
    /// Runs the same core-crate validation as `create` - the edit form
    /// keeps name, owner, and contact mandatory.
    ///
    /// `created_at` is never touched; `updated_at` is stamped here.
    pub async fn update(&self, business: &Business) -> DbResult<Business> {
        validation::validate_required("name", &business.name).map_err(CoreError::from)?;
        validation::validate_required("owner", &business.owner).map_err(CoreError::from)?;
        validation::validate_required("contact", &business.contact).map_err(CoreError::from)?;
        validation::validate_name_length("name", &business.name).map_err(CoreError::from)?;

        let updated_at = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE businesses
            SET name = ?, owner = ?, contact = ?, category = ?, address = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(business.name.trim())
        .bind(business.owner.trim())
        .bind(business.contact.trim())
        .bind(business.category.trim())
        .bind(business.address.trim())
        .bind(updated_at)
        .bind(&business.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Business", &business.id));
        }

        info!(id = %business.id, "Business updated");
        self.get_by_id(&business.id).await
    }

    /// Deletes a business.
    ///
    /// Products attached to it stay in the inventory with their
    /// `business_id` cleared (foreign key `ON DELETE SET NULL`).
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM businesses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Business", id));
        }

        info!(id = %id, "Business deleted (products detached)");
        Ok(())
    }

    /// Counts the products attached to a business.
    pub async fn product_count(&self, id: &str) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE business_id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Total number of registered businesses.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM businesses")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
