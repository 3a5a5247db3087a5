//! # Stock-Status Classifier
//!
//! Derives a stock status from a product's current quantity and its
//! minimum-stock threshold. Both the availability filter and the alert
//! views rely on this one classifier, so the boundaries live in exactly
//! one place.
//!
//! ## Classification Bands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  current_stock relative to min_stock                                │
//! │                                                                     │
//! │  0 ──────────── min/2 ───────────── min ──────────────────► stock   │
//! │  │  Critical      │     Warning      │       Normal                 │
//! │  ▲                                                                  │
//! │  └── OutOfStock (exactly zero)                                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The half-threshold comparison is done as `2 * current <= min` to stay
//! in integer arithmetic. Note that for `min_stock == 1` no positive
//! integer stock can land in `Critical` (it would need `0 < stock <= 0.5`);
//! this mirrors the multiplicative rule the alert views have always used.

use serde::{Deserialize, Serialize};

/// Four-way stock classification.
///
/// Coarse call sites (the availability filter, the dashboard badge)
/// collapse `Critical` and `Warning` into a single "Low Stock" bucket
/// via [`StockStatus::is_low`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// No stock at all (`current == 0`).
    OutOfStock,
    /// At or below half the threshold, but not empty.
    Critical,
    /// Above half the threshold, at or below the threshold.
    Warning,
    /// Above the threshold.
    Normal,
}

impl StockStatus {
    /// Classifies a stock level against its minimum threshold.
    ///
    /// ## Boundary Rules
    /// - `current == 0` is always `OutOfStock`, regardless of threshold
    /// - `min_stock == 0` makes any positive stock `Normal`
    /// - `current == min_stock` (for `min_stock > 0`) is `Warning`
    ///
    /// Negative inputs are clamped conceptually by the invariants
    /// upstream (stock is never stored negative), so they are not
    /// special-cased here.
    pub fn classify(current_stock: i64, min_stock: i64) -> StockStatus {
        if current_stock == 0 {
            StockStatus::OutOfStock
        } else if 2 * current_stock <= min_stock {
            StockStatus::Critical
        } else if current_stock <= min_stock {
            StockStatus::Warning
        } else {
            StockStatus::Normal
        }
    }

    /// Whether the status belongs to the coarse "Low Stock" bucket.
    ///
    /// Explicitly excludes `OutOfStock`: a fully empty product is not
    /// "low", it is gone, and the availability filter treats it
    /// differently.
    #[inline]
    pub fn is_low(&self) -> bool {
        matches!(self, StockStatus::Critical | StockStatus::Warning)
    }

    /// Display label matching the badge text used by the views.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::Critical => "Critical",
            StockStatus::Warning => "Low Stock",
            StockStatus::Normal => "In Stock",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_stock_is_out_of_stock() {
        assert_eq!(StockStatus::classify(0, 0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(0, 10), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(0, 1000), StockStatus::OutOfStock);
    }

    #[test]
    fn test_at_threshold_is_warning() {
        assert_eq!(StockStatus::classify(10, 10), StockStatus::Warning);
        assert_eq!(StockStatus::classify(20, 20), StockStatus::Warning);
    }

    #[test]
    fn test_above_threshold_is_normal() {
        assert_eq!(StockStatus::classify(11, 10), StockStatus::Normal);
        assert_eq!(StockStatus::classify(45, 10), StockStatus::Normal);
    }

    #[test]
    fn test_half_threshold_boundary() {
        // 2 * 5 <= 10 → Critical
        assert_eq!(StockStatus::classify(5, 10), StockStatus::Critical);
        // 2 * 6 > 10 → Warning
        assert_eq!(StockStatus::classify(6, 10), StockStatus::Warning);
        assert_eq!(StockStatus::classify(1, 10), StockStatus::Critical);
    }

    #[test]
    fn test_zero_threshold_any_stock_is_normal() {
        assert_eq!(StockStatus::classify(1, 0), StockStatus::Normal);
        assert_eq!(StockStatus::classify(100, 0), StockStatus::Normal);
    }

    #[test]
    fn test_min_stock_one_has_no_critical_band() {
        // With min_stock = 1 the Critical band would require an integer
        // stock in (0, 0.5], which does not exist.
        assert_eq!(StockStatus::classify(1, 1), StockStatus::Warning);
        assert_eq!(StockStatus::classify(2, 1), StockStatus::Normal);
    }

    #[test]
    fn test_is_low_excludes_out_of_stock() {
        assert!(StockStatus::Critical.is_low());
        assert!(StockStatus::Warning.is_low());
        assert!(!StockStatus::OutOfStock.is_low());
        assert!(!StockStatus::Normal.is_low());
    }

    #[test]
    fn test_labels() {
        assert_eq!(StockStatus::classify(0, 10).label(), "Out of Stock");
        assert_eq!(StockStatus::classify(8, 20).label(), "Critical");
        assert_eq!(StockStatus::classify(15, 20).label(), "Low Stock");
        assert_eq!(StockStatus::classify(25, 20).label(), "In Stock");
    }
}
