//! # Error Types
//!
//! Domain-specific error types for quickbite-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quickbite-core errors (this file)                                     │
//! │  ├── CoreError        - Order / receipt / payment rule failures        │
//! │  └── ValidationError  - Input parsing and field validation             │
//! │                                                                         │
//! │  quickbite-store errors (separate crate)                               │
//! │  └── StoreError       - menu.json read / write / decode failures       │
//! │                                                                         │
//! │  terminal errors (in app)                                              │
//! │  └── TerminalError    - console I/O                                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError / StoreError → prompt message       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant here is recoverable: the terminal prints it and returns to
//! the enclosing prompt.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A receipt was requested for an order with no lines.
    ///
    /// ## When This Occurs
    /// - The customer typed `done` before selecting anything
    ///
    /// The terminal prints the message and skips payment.
    #[error("No items ordered")]
    EmptyOrder,

    /// Accumulating a selection would overflow the line quantity.
    #[error("Quantity for {name} would exceed {max}")]
    QuantityTooLarge { name: String, max: i64 },

    /// A line total or the grand total does not fit in pence.
    ///
    /// ## When This Occurs
    /// - A huge quantity times the unit price
    /// - Several large line totals summed
    ///
    /// The terminal prints the message and skips payment.
    #[error("Order total for {name} is too large to charge")]
    AmountTooLarge { name: String },

    /// A payment step was attempted from a state that does not allow it.
    ///
    /// ## When This Occurs
    /// - `tender` after the payment completed or was cancelled
    /// - `decide_retry` while still awaiting a tender
    #[error("Payment is {state}, cannot {action}")]
    InvalidPaymentState { state: String, action: String },

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// `InvalidFormat` is the parse failure (text is not a number at all) and
/// `OutOfRange` is the range failure (a number, but not a valid index). The
/// terminal reports the two differently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
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

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Text could not be parsed into the expected shape.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate item name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// True for failures where the input text itself did not parse.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ValidationError::InvalidFormat { .. })
    }

    /// True for a well-formed number that falls outside the allowed range.
    pub fn is_range_error(&self) -> bool {
        matches!(self, ValidationError::OutOfRange { .. })
    }
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
        assert_eq!(CoreError::EmptyOrder.to_string(), "No items ordered");

        let err = CoreError::InvalidPaymentState {
            state: "completed".to_string(),
            action: "tender".to_string(),
        };
        assert_eq!(err.to_string(), "Payment is completed, cannot tender");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "item number".to_string(),
            min: 1,
            max: 3,
        };
        assert_eq!(err.to_string(), "item number must be between 1 and 3");
    }

    #[test]
    fn test_parse_and_range_are_distinct() {
        let parse = ValidationError::InvalidFormat {
            field: "item number".to_string(),
            reason: "must be a whole number".to_string(),
        };
        let range = ValidationError::OutOfRange {
            field: "item number".to_string(),
            min: 1,
            max: 2,
        };

        assert!(parse.is_parse_error());
        assert!(!parse.is_range_error());
        assert!(range.is_range_error());
        assert!(!range.is_parse_error());
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "name is required");
    }
}
