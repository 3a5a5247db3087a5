//! # Error Types
//!
//! Domain-specific error types for shelftrack-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  shelftrack-core errors (this file)                                 │
//! │  ├── CoreError        - Ledger policy / domain errors               │
//! │  └── ValidationError  - Form input validation failures              │
//! │                                                                     │
//! │  shelftrack-db errors (separate crate)                              │
//! │  └── DbError          - Backend (store) operation failures          │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → DbError → caller/UI            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (available stock, field name)
//! 3. Errors are enum variants, never String
//! 4. Nothing here is fatal - every error is recoverable by retrying

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They should be caught
/// at the form boundary and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Stock adjustment quantity was zero or negative.
    ///
    /// ## When This Occurs
    /// - Operator submits the stock form with an empty or invalid amount
    /// - A caller computes a quantity and forgets to check the sign
    #[error("Adjustment quantity must be positive, got {requested}")]
    InvalidQuantity { requested: i64 },

    /// A stock-out request exceeds the available stock.
    ///
    /// ## Policy
    /// The ledger *rejects* over-large outs rather than clamping the
    /// result at zero. Clamping silently loses the difference between
    /// what was requested and what was actually on the shelf, which
    /// corrupts the audit trail.
    ///
    /// ## User Workflow
    /// ```text
    /// Stock out (qty: 12)
    ///      │
    ///      ▼
    /// Check stock: available=8
    ///      │
    ///      ▼
    /// InsufficientStock { available: 8, requested: 12 }
    ///      │
    ///      ▼
    /// UI shows: "Only 8 in stock"
    /// ```
    #[error("Insufficient stock: available {available}, requested {requested}")]
    InsufficientStock { available: i64, requested: i64 },

    /// Adjustment quantity exceeds the per-operation maximum.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when form input doesn't meet requirements.
/// Used for early validation before any mutation is attempted, so a
/// rejected form never leaves partial state behind.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., bad SKU characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            available: 8,
            requested: 12,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock: available 8, requested 12"
        );

        let err = CoreError::InvalidQuantity { requested: -3 };
        assert_eq!(err.to_string(), "Adjustment quantity must be positive, got -3");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        };
        assert_eq!(err.to_string(), "sku must be at most 50 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "contact".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
