//! # Validation Module
//!
//! Input parsing and validation for the QuickBite terminal.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console (apps/terminal)                                      │
//! │  └── Reads a raw line, trims it                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── parse_index     "2"   → 2        (parse error vs range error)     │
//! │  ├── parse_quantity  "3"   → 3        (must be > 0)                    │
//! │  └── validate_item_name                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Menu / Order invariants                                      │
//! │  └── unique names, non-negative prices, positive quantities            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quickbite_core::validation::{parse_index, parse_quantity};
//!
//! assert_eq!(parse_index("2", 3, "item number").unwrap(), 2);
//! assert!(parse_index("4", 3, "item number").unwrap_err().is_range_error());
//! assert!(parse_index("two", 3, "item number").unwrap_err().is_parse_error());
//!
//! assert_eq!(parse_quantity("5").unwrap(), 5);
//! assert!(parse_quantity("0").is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Token that ends order taking.
pub const DONE_TOKEN: &str = "done";

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 100 characters
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// True when the answer to a yes/no prompt means "yes".
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}

/// True when the customer has finished selecting items.
pub fn is_done(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(DONE_TOKEN)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a 1-based menu position.
///
/// ## Rules
/// - Text must parse as an integer → otherwise `InvalidFormat`
/// - Value must satisfy `1 <= index <= len` → otherwise `OutOfRange`
///
/// An empty menu has no valid index; every number is out of range.
///
/// ## Returns
/// The 1-based index, unchanged.
pub fn parse_index(input: &str, len: usize, field: &str) -> ValidationResult<usize> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a whole number".to_string(),
        })?;

    let max = i64::try_from(len).unwrap_or(i64::MAX);
    if value < 1 || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 1,
            max,
        });
    }

    // 1 <= value <= len, so the cast is lossless
    Ok(value as usize)
}

/// Parses an order quantity.
///
/// ## User Workflow
/// ```text
/// "Enter the quantity: " ──► parse_quantity(line)
///        │
///        ├── not an integer? → InvalidFormat ("Invalid input...")
///        ├── <= 0?           → MustBePositive ("Please choose at least 1 item")
///        └── OK              → Order::add
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let qty: i64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        })?;

    validate_quantity(qty)?;
    Ok(qty)
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in pence.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
