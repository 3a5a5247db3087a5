//! # Domain Types
//!
//! Core domain types used throughout ShelfTrack.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────┐  │
//! │  │    Business     │   │     Product     │   │  StockMovement   │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────  │  │
//! │  │  id (UUID)      │◄──│  business_id    │◄──│  product_id (FK) │  │
//! │  │  name           │   │  sku (upper)    │   │  change_amount   │  │
//! │  │  owner/contact  │   │  price_cents    │   │  previous/new    │  │
//! │  │  category       │   │  current_stock  │   │  notes           │  │
//! │  └─────────────────┘   │  min_stock      │   └──────────────────┘  │
//! │                        └─────────────────┘      append-only        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership Model
//! A Product is conceptually owned by a Business, but the reference is
//! *nullable*: a product may exist with no business attached. A
//! StockMovement belongs to exactly one Product and is immutable once
//! created - the movement table is an append-only audit trail.
//!
//! ## Dual-Key Identity Pattern
//! Every product has:
//! - `id`: UUID v4 - immutable, used for database relations
//! - `sku`: human-readable business identifier, upper-cased on entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::status::StockStatus;
use crate::validation;
use crate::DEFAULT_MIN_STOCK;

// =============================================================================
// Business
// =============================================================================

/// A registered business that products can be attached to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Business {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name of the business.
    pub name: String,

    /// Owner or contact person.
    pub owner: String,

    /// How to reach the owner (phone or email, free text).
    pub contact: String,

    /// Free-text category label (e.g., "Grocery", "Electronics").
    pub category: String,

    /// Street address.
    pub address: String,

    /// When the business was registered.
    pub created_at: DateTime<Utc>,

    /// When the business was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Form input for registering a business.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBusiness {
    pub name: String,
    pub owner: String,
    pub contact: String,
    pub category: String,
    pub address: String,
}

impl Business {
    /// Builds a new Business from form input.
    ///
    /// Validation runs *before* the entity exists, so a rejected form
    /// never produces partial state. Name, owner and contact are
    /// mandatory; category and address are free text.
    pub fn create(input: NewBusiness) -> Result<Business, ValidationError> {
        validation::validate_required("name", &input.name)?;
        validation::validate_required("owner", &input.owner)?;
        validation::validate_required("contact", &input.contact)?;
        validation::validate_name_length("name", &input.name)?;

        let now = Utc::now();
        Ok(Business {
            id: Uuid::new_v4().to_string(),
            name: input.name.trim().to_string(),
            owner: input.owner.trim().to_string(),
            contact: input.contact.trim().to_string(),
            category: input.category.trim().to_string(),
            address: input.address.trim().to_string(),
            created_at: now,
            updated_at: now,
        })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product tracked in the inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Stock Keeping Unit - business identifier, upper-cased on entry.
    pub sku: String,

    /// Free-text category label.
    pub category: String,

    /// Optional description for product details.
    pub description: Option<String>,

    /// Price in minor currency units (cents). Never a float.
    pub price_cents: i64,

    /// Current stock level. Invariant: always >= 0.
    pub current_stock: i64,

    /// Minimum-stock threshold used by the classifier and alerts.
    pub min_stock: i64,

    /// Owning business. Nullable: relation + lookup, never ownership.
    pub business_id: Option<String>,

    /// Display name of the owning business, resolved by a read-time
    /// join against the business collection. This is a cache of the
    /// relational lookup, never an independent fact - it is not
    /// written back to storage.
    pub business_name: Option<String>,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Form input for registering a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub current_stock: i64,
    /// Defaults to [`DEFAULT_MIN_STOCK`] when not supplied.
    pub min_stock: Option<i64>,
    pub business_id: Option<String>,
}

impl Product {
    /// Builds a new Product from form input.
    ///
    /// ## What This Does
    /// 1. Validates required fields and numeric ranges
    /// 2. Normalizes the SKU to upper-case
    /// 3. Stamps id and timestamps
    ///
    /// The `business_name` field starts empty - it is only ever filled
    /// in by the store's read-time join.
    pub fn create(input: NewProduct) -> Result<Product, ValidationError> {
        validation::validate_product_name(&input.name)?;
        validation::validate_sku(&input.sku)?;
        validation::validate_price_cents(input.price_cents)?;
        validation::validate_stock_level("current_stock", input.current_stock)?;
        let min_stock = input.min_stock.unwrap_or(DEFAULT_MIN_STOCK);
        validation::validate_stock_level("min_stock", min_stock)?;

        let now = Utc::now();
        Ok(Product {
            id: Uuid::new_v4().to_string(),
            name: input.name.trim().to_string(),
            sku: validation::normalize_sku(&input.sku),
            category: input.category.trim().to_string(),
            description: input
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            price_cents: input.price_cents,
            current_stock: input.current_stock,
            min_stock,
            business_id: input.business_id.filter(|id| !id.is_empty()),
            business_name: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Classifies the product's stock level.
    #[inline]
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.current_stock, self.min_stock)
    }

    /// Whether the product needs attention on the alerts view.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock_status().is_low() || self.current_stock == 0
    }
}

// =============================================================================
// Movement Direction
// =============================================================================

/// The direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum MovementDirection {
    /// Stock received (shipment, return, correction upward).
    In,
    /// Stock removed (sale, spoilage, correction downward).
    Out,
}

impl MovementDirection {
    /// Applies the direction's sign to a positive quantity.
    #[inline]
    pub fn signed(&self, quantity: i64) -> i64 {
        match self {
            MovementDirection::In => quantity,
            MovementDirection::Out => -quantity,
        }
    }

    /// Fallback reason recorded when the operator leaves the note empty.
    pub fn default_reason(&self) -> &'static str {
        match self {
            MovementDirection::In => "Stock added",
            MovementDirection::Out => "Stock removed",
        }
    }
}

// =============================================================================
// Stock Movement
// =============================================================================

/// One entry in the append-only stock audit trail.
///
/// Movements are created exactly once, as a side effect of the stock
/// ledger operation, and are never edited or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct StockMovement {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// The product this movement belongs to.
    pub product_id: String,

    /// Direction of the movement.
    pub direction: MovementDirection,

    /// Signed quantity delta (positive for `in`, negative for `out`).
    pub change_amount: i64,

    /// Stock level immediately before the change.
    pub previous_stock: i64,

    /// Stock level immediately after the change.
    pub new_stock: i64,

    /// Free-text reason/note for the movement.
    pub notes: Option<String>,

    /// Product name at read time (joined for display, not authoritative).
    pub product_name: Option<String>,

    /// Product SKU at read time (joined for display, not authoritative).
    pub product_sku: Option<String>,

    /// When the movement was recorded.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product_input() -> NewProduct {
        NewProduct {
            name: "USB-C Charging Cable 2m".to_string(),
            sku: "tech-usb-002".to_string(),
            category: "Electronics".to_string(),
            description: Some("Fast charging USB-C cable".to_string()),
            price_cents: 1499,
            current_stock: 8,
            min_stock: Some(20),
            business_id: Some("biz1".to_string()),
        }
    }

    #[test]
    fn test_product_create_normalizes_sku() {
        let product = Product::create(product_input()).unwrap();
        assert_eq!(product.sku, "TECH-USB-002");
        assert_eq!(product.min_stock, 20);
        assert!(product.business_name.is_none());
    }

    #[test]
    fn test_product_create_defaults_min_stock() {
        let mut input = product_input();
        input.min_stock = None;
        let product = Product::create(input).unwrap();
        assert_eq!(product.min_stock, DEFAULT_MIN_STOCK);
    }

    #[test]
    fn test_product_create_rejects_missing_name() {
        let mut input = product_input();
        input.name = "  ".to_string();
        assert!(Product::create(input).is_err());
    }

    #[test]
    fn test_product_create_rejects_negative_price() {
        let mut input = product_input();
        input.price_cents = -1;
        assert!(Product::create(input).is_err());
    }

    #[test]
    fn test_business_create_requires_contact() {
        let input = NewBusiness {
            name: "Fresh Grocers".to_string(),
            owner: "Asha Patel".to_string(),
            contact: String::new(),
            category: "Grocery".to_string(),
            address: "456 Oak Avenue".to_string(),
        };
        assert!(Business::create(input).is_err());
    }

    #[test]
    fn test_direction_signed_and_default_reason() {
        assert_eq!(MovementDirection::In.signed(12), 12);
        assert_eq!(MovementDirection::Out.signed(12), -12);
        assert_eq!(MovementDirection::In.default_reason(), "Stock added");
        assert_eq!(MovementDirection::Out.default_reason(), "Stock removed");
    }
}
