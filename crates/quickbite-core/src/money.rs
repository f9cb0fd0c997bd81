//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    3 × 1.10 = 3.3000000000000003                                        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    "1.10" is parsed digit by digit into 110 pence                      │
//! │    3 × 110 = 330 pence, printed as £3.30                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Where Floats Still Appear
//! `menu.json` stores prices as JSON numbers. [`Money::from_json_price`] and
//! [`Money::to_json_price`] are the only conversions to and from `f64`, and
//! they are used by the menu record codec alone.
//!
//! ## Usage
//! ```rust
//! use quickbite_core::money::Money;
//!
//! let price = Money::parse("4.50", "price").unwrap();
//! assert_eq!(price.cents(), 450);
//!
//! let total = price.checked_mul_quantity(3).unwrap();
//! assert_eq!(total.to_string(), "£13.50");
//! ```

use std::fmt;
use std::ops::Sub;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

/// The currency symbol used on every displayed amount and prompt.
pub const CURRENCY_SYMBOL: &str = "£";

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (pence).
///
/// ## Design Decisions
/// - **i64 (signed)**: change and differences may be negative mid-calculation
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Checked totals**: quantities are only bounded by `i64`, so receipt
///   arithmetic goes through `checked_*` and reports overflow as an error
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──► ReceiptLine.unit_price ──► ReceiptLine.line_total
///                                                        │
///                    Receipt.grand_total ◄───────────────┘
///                          │
///                          ▼
///                   PaymentSession.total ──► change = tendered − total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    ///
    /// ## Example
    /// ```rust
    /// use quickbite_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (pounds) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use quickbite_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.checked_mul_quantity(3).unwrap().cents(), 897);
    /// assert!(unit_price.checked_mul_quantity(i64::MAX).is_none());
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Formats the amount with two decimals and no currency symbol.
    ///
    /// Used for receipt columns, where the symbol would break alignment.
    ///
    /// ```rust
    /// use quickbite_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(500).to_decimal_string(), "5.00");
    /// assert_eq!(Money::from_cents(-5).to_decimal_string(), "-0.05");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.major().abs(), self.cents_part())
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    /// Parses user-entered text as a non-negative decimal amount.
    ///
    /// ## Accepted
    /// - `"10"`, `"10.5"`, `"10.50"`, `".5"`, `"10."`, `"+3"`
    /// - surrounding whitespace
    /// - extra fraction digits only when they are zeros (`"2.500"`)
    ///
    /// ## Rejected
    /// - empty text → `Required`
    /// - `"-1"` → `MustBeNonNegative`
    /// - `"abc"`, `"1.2.3"`, `"1e3"`, `"1.234"` → `InvalidFormat`
    ///
    /// The digits are read directly into pence; no `f64` is involved.
    pub fn parse(input: &str, field: &str) -> ValidationResult<Money> {
        let text = input.trim();
        if text.is_empty() {
            return Err(ValidationError::Required {
                field: field.to_string(),
            });
        }

        let (negative, unsigned) = match text.as_bytes()[0] {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let cents = parse_unsigned_cents(unsigned, field)?;

        if negative && cents != 0 {
            return Err(ValidationError::MustBeNonNegative {
                field: field.to_string(),
            });
        }

        Ok(Money(cents))
    }

    // =========================================================================
    // JSON Boundary
    // =========================================================================

    /// Converts a JSON number from `menu.json` into Money.
    ///
    /// Rounds to the nearest penny. Non-finite and negative values are
    /// rejected so they never reach a [`crate::Menu`].
    pub fn from_json_price(value: f64, field: &str) -> ValidationResult<Money> {
        if !value.is_finite() {
            return Err(ValidationError::InvalidFormat {
                field: field.to_string(),
                reason: "must be a finite number".to_string(),
            });
        }
        if value < 0.0 {
            return Err(ValidationError::MustBeNonNegative {
                field: field.to_string(),
            });
        }

        let cents = (value * 100.0).round();
        if cents > i64::MAX as f64 {
            return Err(ValidationError::OutOfRange {
                field: field.to_string(),
                min: 0,
                max: i64::MAX / 100,
            });
        }

        Ok(Money(cents as i64))
    }

    /// Converts Money into the JSON number written to `menu.json`.
    pub fn to_json_price(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Reads `"12.34"`-style text (no sign) into pence.
fn parse_unsigned_cents(text: &str, field: &str) -> ValidationResult<i64> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (text, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid("must be a number such as 4.50"));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid("must be a number such as 4.50"));
    }

    let (kept, dropped) = fraction.split_at(fraction.len().min(2));
    if dropped.bytes().any(|b| b != b'0') {
        return Err(invalid("must have at most two decimal places"));
    }

    let too_large = || ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: i64::MAX / 100,
    };

    let mut major: i64 = 0;
    for digit in whole.bytes() {
        major = major
            .checked_mul(10)
            .and_then(|m| m.checked_add(i64::from(digit - b'0')))
            .ok_or_else(too_large)?;
    }

    let minor = match kept.as_bytes() {
        [] => 0,
        [tens] => i64::from(tens - b'0') * 10,
        [tens, ones] => i64::from(tens - b'0') * 10 + i64::from(ones - b'0'),
        _ => unreachable!("fraction is split to at most two digits"),
    };

    major
        .checked_mul(100)
        .and_then(|m| m.checked_add(minor))
        .ok_or_else(too_large)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with the currency symbol, e.g. `£10.99`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            CURRENCY_SYMBOL,
            self.major().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Used for change and shortfall, where both sides are non-negative.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "£10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "£5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-£5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "£0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!((a - b).cents(), 500);
        assert_eq!(a.checked_mul_quantity(3), Some(Money::from_cents(3000)));
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let price = Money::from_cents(500);
        assert_eq!(price.checked_mul_quantity(100_000_000_000_000_000), None);
        assert_eq!(
            Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)),
            None
        );
        assert_eq!(
            Money::from_cents(i64::MAX).checked_add(Money::zero()),
            Some(Money::from_cents(i64::MAX))
        );
    }

    #[test]
    fn test_no_float_drift() {
        let price = Money::parse("1.10", "price").unwrap();
        assert_eq!(price.checked_mul_quantity(3).unwrap().to_string(), "£3.30");

        let a = Money::parse("0.1", "price").unwrap();
        let b = Money::parse("0.2", "price").unwrap();
        assert_eq!(a.checked_add(b).unwrap().cents(), 30);
    }

    #[test]
    fn test_parse_accepts_decimal_forms() {
        let cases = [
            ("10", 1000),
            ("10.5", 1050),
            ("10.50", 1050),
            (".5", 50),
            ("10.", 1000),
            ("+3", 300),
            ("  4.25  ", 425),
            ("2.500", 250),
            ("0", 0),
            ("-0", 0),
        ];
        for (input, cents) in cases {
            assert_eq!(Money::parse(input, "price").unwrap().cents(), cents, "{input}");
        }
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Money::parse("", "price"),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            Money::parse("-1", "price"),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
        for input in ["abc", "1.2.3", "1e3", "1.234", ".", "£5", "5 00", "-"] {
            let err = Money::parse(input, "price").unwrap_err();
            assert!(err.is_parse_error(), "{input} gave {err:?}");
        }
    }

    #[test]
    fn test_parse_overflow_is_range_error() {
        let err = Money::parse("99999999999999999999", "price").unwrap_err();
        assert!(err.is_range_error());
    }

    #[test]
    fn test_json_price_conversion() {
        assert_eq!(Money::from_json_price(10.0, "price").unwrap().cents(), 1000);
        assert_eq!(Money::from_json_price(4.99, "price").unwrap().cents(), 499);
        assert_eq!(Money::from_json_price(0.29, "price").unwrap().cents(), 29);
        assert!(Money::from_json_price(-1.0, "price").is_err());
        assert!(Money::from_json_price(f64::NAN, "price").is_err());
        assert!(Money::from_json_price(f64::INFINITY, "price").is_err());

        assert_eq!(Money::from_cents(1050).to_json_price(), 10.5);
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(1000).to_decimal_string(), "10.00");
        assert_eq!(Money::from_cents(7).to_decimal_string(), "0.07");
    }
}
