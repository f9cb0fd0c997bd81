//! # Order
//!
//! Accumulates a customer's selections for one transaction.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Accumulation                                   │
//! │                                                                         │
//! │  Prompt                    Operation                 Order Change       │
//! │  ──────                    ─────────                 ────────────       │
//! │                                                                         │
//! │  item "1", qty "2" ──────► add_selection() ───────► Burger: 2           │
//! │                                                                         │
//! │  item "1", qty "3" ──────► add_selection() ───────► Burger: 5           │
//! │                                                                         │
//! │  item "9", qty "1" ──────► OutOfRange ────────────► (unchanged)         │
//! │                                                                         │
//! │  "done" ─────────────────► Receipt::compute(&order, &menu)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Orders record item **names**, not prices. Prices are resolved when the
//! receipt is computed.

use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::{Menu, MenuItem};
use crate::validation::{parse_quantity, validate_quantity};

/// One (name, quantity) entry of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub name: String,
    pub quantity: i64,
}

/// A customer's selections.
///
/// ## Invariants
/// - Lines are unique by `name` (re-selecting accumulates)
/// - Every quantity is > 0
///
/// Line order follows first selection and is only used for display.
#[derive(Debug, Clone)]
pub struct Order {
    id: Uuid,
    lines: Vec<OrderLine>,
}

impl Order {
    /// Creates a new empty order with a fresh identifier.
    pub fn new() -> Self {
        Order {
            id: Uuid::new_v4(),
            lines: Vec::new(),
        }
    }

    /// Identifier carried in log records for this order.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Quantity recorded for a name (0 if never selected).
    pub fn quantity_of(&self, name: &str) -> i64 {
        self.lines
            .iter()
            .find(|line| line.name == name)
            .map_or(0, |line| line.quantity)
    }

    /// Adds `quantity` of `item`, or increases the existing line.
    ///
    /// ## Returns
    /// The line's new quantity.
    pub fn add(&mut self, item: &MenuItem, quantity: i64) -> CoreResult<i64> {
        validate_quantity(quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.name == item.name()) {
            let new_qty = line
                .quantity
                .checked_add(quantity)
                .ok_or_else(|| CoreError::QuantityTooLarge {
                    name: item.name().to_string(),
                    max: i64::MAX,
                })?;
            line.quantity = new_qty;
            return Ok(new_qty);
        }

        self.lines.push(OrderLine {
            name: item.name().to_string(),
            quantity,
        });
        Ok(quantity)
    }

    /// Parses an item position and a quantity as typed, then adds them.
    ///
    /// ## Errors
    /// - index text not an integer → `InvalidFormat`
    /// - index outside `1..=menu.len()` → `OutOfRange`
    /// - quantity not an integer → `InvalidFormat`
    /// - quantity <= 0 → `MustBePositive`
    ///
    /// The order is untouched on every error.
    pub fn add_selection(
        &mut self,
        menu: &Menu,
        index_input: &str,
        quantity_input: &str,
    ) -> CoreResult<i64> {
        let item = menu.select(index_input)?;
        let quantity = parse_quantity(quantity_input)?;
        self.add(item, quantity)
    }

    /// Number of distinct items.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines, saturating at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

/// Two orders are equal when they hold the same quantities per name,
/// whatever the selection order and identifier.
impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.lines.len() == other.lines.len()
            && self
                .lines
                .iter()
                .all(|line| other.quantity_of(&line.name) == line.quantity)
    }
}

impl Eq for Order {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::money::Money;

    fn menu() -> Menu {
        let mut menu = Menu::new();
        menu.add_item("Burger", Money::from_cents(500)).unwrap();
        menu.add_item("Fries", Money::from_cents(250)).unwrap();
        menu
    }

    #[test]
    fn test_add_selection() {
        let menu = menu();
        let mut order = Order::new();

        assert_eq!(order.add_selection(&menu, "1", "2").unwrap(), 2);

        assert_eq!(order.item_count(), 1);
        assert_eq!(order.quantity_of("Burger"), 2);
    }

    #[test]
    fn test_reselecting_accumulates() {
        let menu = menu();
        let mut order = Order::new();

        order.add_selection(&menu, "1", "2").unwrap();
        order.add_selection(&menu, "2", "1").unwrap();
        assert_eq!(order.add_selection(&menu, "1", "3").unwrap(), 5);

        assert_eq!(order.item_count(), 2);
        assert_eq!(order.quantity_of("Burger"), 5);
        assert_eq!(order.total_quantity(), 6);
        assert_eq!(order.lines()[0].name, "Burger");
    }

    #[test]
    fn test_invalid_selection_keeps_order() {
        let menu = menu();
        let mut order = Order::new();
        order.add_selection(&menu, "1", "2").unwrap();
        let before = order.clone();

        let cases = [("0", "1"), ("3", "1"), ("abc", "1"), ("1", "0"), ("1", "-2"), ("1", "x")];
        for (index, qty) in cases {
            assert!(order.add_selection(&menu, index, qty).is_err(), "{index}/{qty}");
        }
        assert_eq!(order, before);
    }

    #[test]
    fn test_error_kinds() {
        let menu = menu();
        let mut order = Order::new();

        let err = order.add_selection(&menu, "zero", "1").unwrap_err();
        assert!(matches!(err, CoreError::Validation(e) if e.is_parse_error()));

        let err = order.add_selection(&menu, "7", "1").unwrap_err();
        assert!(matches!(err, CoreError::Validation(e) if e.is_range_error()));

        let err = order.add_selection(&menu, "1", "0").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_quantity_overflow() {
        let menu = menu();
        let mut order = Order::new();
        let burger = menu.get(1).unwrap();

        order.add(burger, i64::MAX).unwrap();
        assert!(matches!(
            order.add(burger, 1),
            Err(CoreError::QuantityTooLarge { .. })
        ));
        assert_eq!(order.quantity_of("Burger"), i64::MAX);

        order.add(menu.get(2).unwrap(), 5).unwrap();
        assert_eq!(order.total_quantity(), i64::MAX);
    }

    #[test]
    fn test_equality_ignores_selection_order() {
        let menu = menu();
        let mut a = Order::new();
        let mut b = Order::new();

        a.add_selection(&menu, "1", "1").unwrap();
        a.add_selection(&menu, "2", "2").unwrap();
        b.add_selection(&menu, "2", "2").unwrap();
        b.add_selection(&menu, "1", "1").unwrap();

        assert_eq!(a, b);
        assert_ne!(a.id(), b.id());
    }
}
