//! # Stock Adjustment Arithmetic
//!
//! The pure half of the stock-ledger operation: given a current stock
//! level and a requested adjustment, decide whether the adjustment is
//! legal and what the resulting level is. The I/O half (read product,
//! write stock, append movement, all in one transaction) lives in
//! `shelftrack-db`.
//!
//! ## Policy: Reject, Don't Clamp
//! An `out` adjustment larger than the available stock is rejected with
//! [`CoreError::InsufficientStock`] instead of clamping the result at
//! zero. A clamped write would record a movement whose delta disagrees
//! with what actually left the shelf, and the audit trail is only
//! useful if deltas are exact. Either way the invariant holds: the
//! resulting stock is never negative.

use crate::error::{CoreError, CoreResult};
use crate::types::MovementDirection;
use crate::MAX_ADJUSTMENT_QUANTITY;

/// The outcome of a planned stock adjustment.
///
/// `delta` is signed: positive for `in`, negative for `out`. It is
/// exactly what gets recorded on the movement row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockAdjustment {
    /// Stock level before the change.
    pub previous_stock: i64,
    /// Stock level after the change.
    pub new_stock: i64,
    /// Signed quantity delta (`new_stock - previous_stock`).
    pub delta: i64,
}

/// Plans a stock adjustment without applying it.
///
/// ## Arguments
/// * `current_stock` - the product's stock level as read from the store
/// * `quantity` - requested amount, must be strictly positive
/// * `direction` - `In` adds, `Out` removes
///
/// ## Errors
/// * [`CoreError::InvalidQuantity`] - `quantity <= 0`
/// * [`CoreError::QuantityTooLarge`] - `quantity` above the entry cap
/// * [`CoreError::InsufficientStock`] - `Out` with `quantity > current_stock`
pub fn plan_adjustment(
    current_stock: i64,
    quantity: i64,
    direction: MovementDirection,
) -> CoreResult<StockAdjustment> {
    if quantity <= 0 {
        return Err(CoreError::InvalidQuantity {
            requested: quantity,
        });
    }

    if quantity > MAX_ADJUSTMENT_QUANTITY {
        return Err(CoreError::QuantityTooLarge {
            requested: quantity,
            max: MAX_ADJUSTMENT_QUANTITY,
        });
    }

    let new_stock = match direction {
        MovementDirection::In => current_stock + quantity,
        MovementDirection::Out => {
            if quantity > current_stock {
                return Err(CoreError::InsufficientStock {
                    available: current_stock,
                    requested: quantity,
                });
            }
            current_stock - quantity
        }
    };

    Ok(StockAdjustment {
        previous_stock: current_stock,
        new_stock,
        delta: direction.signed(quantity),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_in_adds_quantity() {
        let adj = plan_adjustment(45, 20, MovementDirection::In).unwrap();
        assert_eq!(adj.previous_stock, 45);
        assert_eq!(adj.new_stock, 65);
        assert_eq!(adj.delta, 20);
    }

    #[test]
    fn test_stock_out_subtracts_quantity() {
        let adj = plan_adjustment(20, 12, MovementDirection::Out).unwrap();
        assert_eq!(adj.previous_stock, 20);
        assert_eq!(adj.new_stock, 8);
        assert_eq!(adj.delta, -12);
    }

    #[test]
    fn test_stock_out_to_exactly_zero() {
        let adj = plan_adjustment(12, 12, MovementDirection::Out).unwrap();
        assert_eq!(adj.new_stock, 0);
    }

    #[test]
    fn test_over_large_out_is_rejected_not_clamped() {
        let err = plan_adjustment(8, 12, MovementDirection::Out).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 8,
                requested: 12
            }
        ));
    }

    #[test]
    fn test_non_positive_quantity_is_rejected() {
        assert!(matches!(
            plan_adjustment(10, 0, MovementDirection::In),
            Err(CoreError::InvalidQuantity { requested: 0 })
        ));
        assert!(matches!(
            plan_adjustment(10, -5, MovementDirection::Out),
            Err(CoreError::InvalidQuantity { requested: -5 })
        ));
    }

    #[test]
    fn test_quantity_cap() {
        assert!(matches!(
            plan_adjustment(10, MAX_ADJUSTMENT_QUANTITY + 1, MovementDirection::In),
            Err(CoreError::QuantityTooLarge { .. })
        ));
        assert!(plan_adjustment(10, MAX_ADJUSTMENT_QUANTITY, MovementDirection::In).is_ok());
    }

    #[test]
    fn test_new_stock_never_negative() {
        for current in 0..30 {
            for quantity in 1..40 {
                for direction in [MovementDirection::In, MovementDirection::Out] {
                    if let Ok(adj) = plan_adjustment(current, quantity, direction) {
                        assert!(adj.new_stock >= 0);
                        assert_eq!(adj.new_stock, adj.previous_stock + adj.delta);
                    }
                }
            }
        }
    }
}
