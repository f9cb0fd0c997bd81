//! # Receipt
//!
//! Joins an [`Order`] against the current [`Menu`] to price it, and lays the
//! result out as a fixed-width table.
//!
//! ## Price Resolution
//! ```text
//! Order { Burger: 2, Shake: 1 }        Menu [Burger £5.00]
//!              │                              │
//!              └──────────┬───────────────────┘
//!                         ▼
//!            Receipt::compute(&order, &menu)
//!                         │
//!        Burger  qty 2  unit £5.00  total £10.00
//!        Shake   qty 1  unit £0.00  total  £0.00   ← no longer on the menu
//!                         │
//!                 grand total £10.00 ──► PaymentSession::new(total)
//! ```
//!
//! Prices are looked up by name in the menu passed to `compute`, so a
//! receipt always reflects the latest edits, never the prices seen while
//! ordering.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::order::Order;
use crate::types::Menu;

/// Width of the `=` rules framing the table.
pub const RULE_WIDTH: usize = 45;

/// Timestamp layout printed under the heading.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One priced line of a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

/// A priced order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    order_id: Uuid,
    lines: Vec<ReceiptLine>,
    grand_total: Money,
}

impl Receipt {
    /// Prices every order line against `menu`.
    ///
    /// Names missing from the menu are priced at zero.
    ///
    /// ## Errors
    /// - `CoreError::EmptyOrder` when the order has no lines
    /// - `CoreError::AmountTooLarge` when a line or the sum overflows
    ///
    /// The caller must skip payment in both cases.
    pub fn compute(order: &Order, menu: &Menu) -> CoreResult<Receipt> {
        if order.is_empty() {
            return Err(CoreError::EmptyOrder);
        }

        let too_large = |name: &str| CoreError::AmountTooLarge {
            name: name.to_string(),
        };

        let mut lines = Vec::with_capacity(order.lines().len());
        let mut grand_total = Money::zero();

        for line in order.lines() {
            let unit_price = menu.price_of(&line.name).unwrap_or_default();
            let line_total = unit_price
                .checked_mul_quantity(line.quantity)
                .ok_or_else(|| too_large(&line.name))?;
            grand_total = grand_total
                .checked_add(line_total)
                .ok_or_else(|| too_large(&line.name))?;

            lines.push(ReceiptLine {
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price,
                line_total,
            });
        }

        Ok(Receipt {
            order_id: order.id(),
            lines,
            grand_total,
        })
    }

    pub fn order_id(&self) -> Uuid {
        self.order_id
    }

    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Sum of all line totals; the amount the customer must pay.
    pub fn grand_total(&self) -> Money {
        self.grand_total
    }

    /// Renders the receipt table.
    ///
    /// ## Layout
    /// ```text
    /// --- Your Receipt ---
    /// Date/Time: 2024-05-01 12:30:00
    ///
    /// =============================================
    /// Item         Quantity      Price      Total
    /// =============================================
    /// Burger              2       5.00      10.00
    /// =============================================
    /// Total to pay: £10.00
    /// =============================================
    /// ```
    ///
    /// `issued_at` is supplied by the caller so rendering stays pure.
    pub fn render(&self, issued_at: NaiveDateTime) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        out.push_str("--- Your Receipt ---\n");
        out.push_str(&format!(
            "Date/Time: {}\n\n",
            issued_at.format(TIMESTAMP_FORMAT)
        ));
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!(
            "{:<10} {:>10} {:>10} {:>10}\n",
            "Item", "Quantity", "Price", "Total"
        ));
        out.push_str(&rule);
        out.push('\n');

        for line in &self.lines {
            out.push_str(&format!(
                "{:<10} {:>10} {:>10} {:>10}\n",
                line.name,
                line.quantity,
                line.unit_price.to_decimal_string(),
                line.line_total.to_decimal_string()
            ));
        }

        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!(
            "Total to pay: {}\n",
            self.grand_total
        ));
        out.push_str(&rule);
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn burger_menu() -> Menu {
        let mut menu = Menu::new();
        menu.add_item("Burger", Money::from_cents(500)).unwrap();
        menu
    }

    fn issued_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_burger_scenario() {
        let menu = burger_menu();
        let mut order = Order::new();
        order.add_selection(&menu, "1", "2").unwrap();

        let receipt = Receipt::compute(&order, &menu).unwrap();

        assert_eq!(
            receipt.lines(),
            &[ReceiptLine {
                name: "Burger".to_string(),
                quantity: 2,
                unit_price: Money::from_cents(500),
                line_total: Money::from_cents(1000),
            }]
        );
        assert_eq!(receipt.grand_total(), Money::from_cents(1000));
        assert_eq!(receipt.order_id(), order.id());
    }

    #[test]
    fn test_empty_order_short_circuits() {
        let order = Order::new();
        assert_eq!(
            Receipt::compute(&order, &burger_menu()),
            Err(CoreError::EmptyOrder)
        );
    }

    #[test]
    fn test_grand_total_is_sum_of_lines() {
        let mut menu = Menu::new();
        menu.add_item("Wrap", Money::from_cents(649)).unwrap();
        menu.add_item("Soup", Money::from_cents(375)).unwrap();
        menu.add_item("Tea", Money::from_cents(110)).unwrap();

        let mut order = Order::new();
        order.add_selection(&menu, "1", "3").unwrap();
        order.add_selection(&menu, "3", "7").unwrap();
        order.add_selection(&menu, "2", "1").unwrap();

        let receipt = Receipt::compute(&order, &menu).unwrap();
        let expected: i64 = order
            .lines()
            .iter()
            .map(|l| l.quantity * menu.price_of(&l.name).unwrap().cents())
            .sum();

        assert_eq!(receipt.grand_total().cents(), expected);
        assert_eq!(receipt.grand_total().cents(), 3 * 649 + 7 * 110 + 375);
    }

    #[test]
    fn test_prices_resolve_against_current_menu() {
        let mut menu = Menu::new();
        menu.add_item("Burger", Money::from_cents(500)).unwrap();
        menu.add_item("Fries", Money::from_cents(250)).unwrap();

        let mut order = Order::new();
        order.add_selection(&menu, "1", "2").unwrap();
        order.add_selection(&menu, "2", "4").unwrap();

        // Reprice the burger and drop the fries after ordering.
        menu.update_price(1, Money::from_cents(600)).unwrap();
        menu.remove_item(2).unwrap();

        let receipt = Receipt::compute(&order, &menu).unwrap();
        assert_eq!(receipt.lines()[0].unit_price, Money::from_cents(600));
        assert_eq!(receipt.lines()[1].unit_price, Money::zero());
        assert_eq!(receipt.lines()[1].line_total, Money::zero());
        assert_eq!(receipt.grand_total(), Money::from_cents(1200));
    }

    #[test]
    fn test_render_layout() {
        let menu = burger_menu();
        let mut order = Order::new();
        order.add_selection(&menu, "1", "2").unwrap();
        let receipt = Receipt::compute(&order, &menu).unwrap();

        let expected = "\
--- Your Receipt ---
Date/Time: 2024-05-01 12:30:00

=============================================
Item         Quantity      Price      Total
=============================================
Burger              2       5.00      10.00
=============================================
Total to pay: £10.00
=============================================
";
        assert_eq!(receipt.render(issued_at()), expected);
    }

    #[test]
    fn test_line_total_overflow_is_an_error() {
        let menu = burger_menu();
        let mut order = Order::new();
        order
            .add_selection(&menu, "1", "100000000000000000")
            .unwrap();

        assert_eq!(
            Receipt::compute(&order, &menu),
            Err(CoreError::AmountTooLarge {
                name: "Burger".to_string()
            })
        );
    }

    #[test]
    fn test_grand_total_overflow_is_an_error() {
        let mut menu = Menu::new();
        menu.add_item("Burger", Money::from_cents(100)).unwrap();
        menu.add_item("Fries", Money::from_cents(100)).unwrap();

        // Each line fits on its own; the sum does not.
        let quantity = (i64::MAX / 100).to_string();
        let mut order = Order::new();
        order.add_selection(&menu, "1", &quantity).unwrap();
        order.add_selection(&menu, "2", &quantity).unwrap();

        assert_eq!(
            Receipt::compute(&order, &menu),
            Err(CoreError::AmountTooLarge {
                name: "Fries".to_string()
            })
        );
    }
}
