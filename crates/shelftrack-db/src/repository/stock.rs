//! # Stock Ledger
//!
//! The single write path for stock levels. Every stock change runs
//! through [`StockLedger::adjust_stock`], which atomically:
//!
//! 1. Reads the product's current stock inside a transaction
//! 2. Plans the adjustment with the core crate's policy rules
//! 3. Writes the new stock level
//! 4. Appends an immutable row to `stock_history`
//!
//! ## Atomicity
//! Either both writes land or neither does. A rejected adjustment
//! (insufficient stock, bad quantity) rolls back before any write, so
//! the stock level and the audit trail can never disagree.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  BEGIN                                                              │
//! │    SELECT current_stock ──▶ plan_adjustment() ──▶ Err? ──▶ ROLLBACK │
//! │                                    │                                │
//! │                                    ▼                                │
//! │    UPDATE products.current_stock                                    │
//! │    INSERT stock_history row                                         │
//! │  COMMIT                                                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};
use uuid::Uuid;

use shelftrack_core::{ledger, MovementDirection, StockMovement};

use crate::error::{DbError, DbResult};

/// Shared SELECT clause: movement columns plus joined product display fields.
const MOVEMENT_SELECT: &str = r#"
    SELECT m.id, m.product_id, m.direction, m.change_amount,
           m.previous_stock, m.new_stock, m.notes,
           p.name AS product_name, p.sku AS product_sku,
           m.created_at
    FROM stock_history m
    LEFT JOIN products p ON p.id = m.product_id
"#;

/// The append-only stock ledger.
#[derive(Debug, Clone)]
pub struct StockLedger {
    pool: SqlitePool,
}

impl StockLedger {
    /// Creates a new stock ledger over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        StockLedger { pool }
    }

    /// Atomically adjusts a product's stock and records the movement.
    ///
    /// `quantity` is the positive amount to move; `direction` gives it
    /// a sign. An empty or missing note falls back to the direction's
    /// default reason ("Stock added" / "Stock removed").
    ///
    /// ## Errors
    /// - [`DbError::NotFound`] - no product with that id
    /// - [`DbError::Domain`] - quantity <= 0, quantity over the cap, or
    ///   an `out` movement larger than the available stock
    ///
    /// On any error the transaction rolls back: stock is unchanged and
    /// no history row exists.
    pub async fn adjust_stock(
        &self,
        product_id: &str,
        quantity: i64,
        direction: MovementDirection,
        notes: Option<&str>,
    ) -> DbResult<StockMovement> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query("SELECT current_stock, name, sku FROM products WHERE id = ?")
            .bind(product_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::not_found("Product", product_id))?;

        let current_stock: i64 = row.get("current_stock");
        let product_name: String = row.get("name");
        let product_sku: String = row.get("sku");

        // Policy lives in the core crate; a rejection here leaves the
        // transaction unwritten.
        let plan = ledger::plan_adjustment(current_stock, quantity, direction)?;

        let now = Utc::now();

        sqlx::query("UPDATE products SET current_stock = ?, updated_at = ? WHERE id = ?")
            .bind(plan.new_stock)
            .bind(now)
            .bind(product_id)
            .execute(&mut *tx)
            .await?;

        let movement = StockMovement {
            id: Uuid::new_v4().to_string(),
            product_id: product_id.to_string(),
            direction,
            change_amount: plan.delta,
            previous_stock: plan.previous_stock,
            new_stock: plan.new_stock,
            notes: Some(
                notes
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| direction.default_reason())
                    .to_string(),
            ),
            product_name: Some(product_name),
            product_sku: Some(product_sku),
            created_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO stock_history
                (id, product_id, direction, change_amount, previous_stock, new_stock, notes, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&movement.id)
        .bind(&movement.product_id)
        .bind(movement.direction)
        .bind(movement.change_amount)
        .bind(movement.previous_stock)
        .bind(movement.new_stock)
        .bind(&movement.notes)
        .bind(movement.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            product_id = %product_id,
            delta = movement.change_amount,
            new_stock = movement.new_stock,
            "Stock adjusted"
        );
        Ok(movement)
    }

    /// Most recent movements across all products, newest first.
    pub async fn recent_movements(&self, limit: i64) -> DbResult<Vec<StockMovement>> {
        let query = format!("{MOVEMENT_SELECT} ORDER BY m.created_at DESC LIMIT ?");
        let movements = sqlx::query_as::<_, StockMovement>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = movements.len(), "Fetched recent movements");
        Ok(movements)
    }

    /// Full movement history for one product, newest first.
    pub async fn movements_for_product(&self, product_id: &str) -> DbResult<Vec<StockMovement>> {
        let query = format!("{MOVEMENT_SELECT} WHERE m.product_id = ? ORDER BY m.created_at DESC");
        let movements = sqlx::query_as::<_, StockMovement>(&query)
            .bind(product_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(movements)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_util::test_db;
    use shelftrack_core::{CoreError, NewProduct};

    async fn seeded_product(db: &crate::pool::Database, stock: i64) -> shelftrack_core::Product {
        db.products()
            .create(NewProduct {
                name: "USB-C Charging Cable 2m".to_string(),
                sku: "TECH-USB-002".to_string(),
                category: "Electronics".to_string(),
                description: None,
                price_cents: 1499,
                current_stock: stock,
                min_stock: Some(20),
                business_id: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_stock_in_adds_and_records() {
        let db = test_db().await;
        let product = seeded_product(&db, 25).await;

        let movement = db
            .ledger()
            .adjust_stock(&product.id, 20, MovementDirection::In, Some("New shipment received"))
            .await
            .unwrap();

        assert_eq!(movement.previous_stock, 25);
        assert_eq!(movement.new_stock, 45);
        assert_eq!(movement.change_amount, 20);
        assert_eq!(movement.notes.as_deref(), Some("New shipment received"));

        let fetched = db.products().get_by_id(&product.id).await.unwrap();
        assert_eq!(fetched.current_stock, 45);
    }

    #[tokio::test]
    async fn test_stock_out_records_signed_delta() {
        let db = test_db().await;
        let product = seeded_product(&db, 20).await;

        let movement = db
            .ledger()
            .adjust_stock(&product.id, 12, MovementDirection::Out, Some("Customer orders"))
            .await
            .unwrap();

        assert_eq!(movement.previous_stock, 20);
        assert_eq!(movement.new_stock, 8);
        assert_eq!(movement.change_amount, -12);

        let fetched = db.products().get_by_id(&product.id).await.unwrap();
        assert_eq!(fetched.current_stock, 8);
    }

    #[tokio::test]
    async fn test_insufficient_stock_rejected_without_any_write() {
        let db = test_db().await;
        let product = seeded_product(&db, 5).await;

        let err = db
            .ledger()
            .adjust_stock(&product.id, 6, MovementDirection::Out, None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DbError::Domain(CoreError::InsufficientStock {
                available: 5,
                requested: 6
            })
        ));

        // Stock untouched, no history row
        let fetched = db.products().get_by_id(&product.id).await.unwrap();
        assert_eq!(fetched.current_stock, 5);
        let history = db.ledger().movements_for_product(&product.id).await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_zero_and_negative_quantity_rejected() {
        let db = test_db().await;
        let product = seeded_product(&db, 10).await;

        for qty in [0, -5] {
            let err = db
                .ledger()
                .adjust_stock(&product.id, qty, MovementDirection::In, None)
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                DbError::Domain(CoreError::InvalidQuantity { .. })
            ));
        }
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let db = test_db().await;
        let err = db
            .ledger()
            .adjust_stock("nope", 1, MovementDirection::In, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_default_reason_fills_empty_notes() {
        let db = test_db().await;
        let product = seeded_product(&db, 10).await;

        let added = db
            .ledger()
            .adjust_stock(&product.id, 1, MovementDirection::In, None)
            .await
            .unwrap();
        assert_eq!(added.notes.as_deref(), Some("Stock added"));

        let removed = db
            .ledger()
            .adjust_stock(&product.id, 1, MovementDirection::Out, Some("   "))
            .await
            .unwrap();
        assert_eq!(removed.notes.as_deref(), Some("Stock removed"));
    }

    #[tokio::test]
    async fn test_history_is_complete_and_joined() {
        let db = test_db().await;
        let product = seeded_product(&db, 20).await;
        let ledger = db.ledger();

        ledger
            .adjust_stock(&product.id, 5, MovementDirection::In, None)
            .await
            .unwrap();
        ledger
            .adjust_stock(&product.id, 12, MovementDirection::Out, None)
            .await
            .unwrap();

        let history = ledger.movements_for_product(&product.id).await.unwrap();
        assert_eq!(history.len(), 2);
        // Chained: each movement starts where the previous ended
        assert_eq!(history[1].new_stock, 25);
        assert_eq!(history[0].previous_stock, 25);
        assert_eq!(history[0].new_stock, 13);
        assert_eq!(history[0].product_sku.as_deref(), Some("TECH-USB-002"));

        let recent = ledger.recent_movements(1).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, history[0].id);
    }
}
