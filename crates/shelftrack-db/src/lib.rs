//! # shelftrack-db: Entity Store
//!
//! SQLite persistence for ShelfTrack: businesses, products, and the
//! append-only stock history, behind a repository API.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        shelftrack-db                                │
//! │                                                                     │
//! │  ┌──────────────┐      ┌──────────────────────────────────────────┐ │
//! │  │   pool.rs    │      │            repository/                   │ │
//! │  │              │      │                                          │ │
//! │  │ DbConfig     │──────▶ business.rs  BusinessRepository          │ │
//! │  │ Database     │      │ product.rs   ProductRepository           │ │
//! │  │              │      │ stock.rs     StockLedger                 │ │
//! │  └──────────────┘      └──────────────────────────────────────────┘ │
//! │         │                                                           │
//! │  ┌──────────────┐      ┌──────────────┐                             │
//! │  │ migrations.rs│      │   error.rs   │                             │
//! │  │ embedded SQL │      │   DbError    │                             │
//! │  └──────────────┘      └──────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use shelftrack_db::{Database, DbConfig};
//! use shelftrack_core::MovementDirection;
//!
//! let db = Database::new(DbConfig::new("shelftrack.db")).await?;
//!
//! let products = db.products().list().await?;
//! let adjustment = db.ledger()
//!     .adjust_stock(&products[0].id, 12, MovementDirection::Out, Some("Customer orders"))
//!     .await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// Re-export main types for convenience
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::business::BusinessRepository;
pub use repository::product::ProductRepository;
pub use repository::stock::StockLedger;
