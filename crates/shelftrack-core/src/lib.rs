//! # shelftrack-core: Pure Business Logic for ShelfTrack
//!
//! This crate is the **heart** of ShelfTrack. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     ShelfTrack Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  UI / Form Layer (external)                 │   │
//! │  │   Product pages ── Business pages ── Alerts ── Scanner     │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │             ★ shelftrack-core (THIS CRATE) ★                │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────┐ │   │
//! │  │  │  types  │ │ filter  │ │ status  │ │ ledger  │ │  qr  │ │   │
//! │  │  │ Product │ │ search  │ │ classify│ │ adjust  │ │ scan │ │   │
//! │  │  │Business │ │ buckets │ │ low/out │ │  math   │ │ codec│ │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────┘ │   │
//! │  │                                                             │   │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │               shelftrack-db (Entity Store)                  │   │
//! │  │         SQLite queries, migrations, repositories            │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Business, Product, StockMovement)
//! - [`status`] - Stock-status classifier (out / critical / warning / normal)
//! - [`filter`] - Filter/search engine for products and businesses
//! - [`ledger`] - Stock adjustment arithmetic and policy
//! - [`qr`] - QR payload encoding and scan resolution
//! - [`error`] - Domain error types
//! - [`validation`] - Form-boundary validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Quantities**: Stock levels and prices are integers (minor
//!    currency units), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod filter;
pub mod ledger;
pub mod qr;
pub mod status;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shelftrack_core::Product` instead of
// `use shelftrack_core::types::Product`

pub use error::{CoreError, ValidationError};
pub use filter::{filter_businesses, filter_products, PriceBucket, ProductFilter, StockFilter};
pub use ledger::{plan_adjustment, StockAdjustment};
pub use status::StockStatus;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default minimum-stock threshold for new products.
///
/// ## Business Reason
/// Operators rarely set a threshold when first registering a product.
/// Ten units is a sensible reorder point for small shops and matches
/// what the product form pre-fills.
pub const DEFAULT_MIN_STOCK: i64 = 10;

/// Maximum single stock adjustment accepted by the ledger.
///
/// ## Business Reason
/// Prevents accidental over-entry (e.g., typing 10000 instead of 100).
pub const MAX_ADJUSTMENT_QUANTITY: i64 = 100_000;
