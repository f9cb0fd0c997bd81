//! # Checkout Command
//!
//! Prices the order against the current menu, prints the receipt and hands
//! the grand total to [`process_payment`].

use std::io::{BufRead, Write};

use chrono::Local;
use quickbite_core::{CoreError, Menu, Order, PaymentOutcome, Receipt};
use tracing::{debug, warn};

use crate::commands::payment::process_payment;
use crate::console::Console;
use crate::error::TerminalResult;

/// Prints the receipt and collects payment.
///
/// Returns `None` when there was nothing to pay for; payment is skipped.
pub fn checkout<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    order: &Order,
    menu: &Menu,
) -> TerminalResult<Option<PaymentOutcome>> {
    let receipt = match Receipt::compute(order, menu) {
        Ok(receipt) => receipt,
        Err(CoreError::EmptyOrder) => {
            console.say("No items ordered. Returning to the main menu.")?;
            return Ok(None);
        }
        Err(e) => {
            warn!(order_id = %order.id(), error = %e, "Order cannot be charged");
            console.say(format!("{}. Returning to the main menu.", e))?;
            return Ok(None);
        }
    };

    debug!(
        order_id = %receipt.order_id(),
        total = %receipt.grand_total(),
        "Receipt computed"
    );

    console.blank()?;
    console.print(&receipt.render(Local::now().naive_local()))?;

    process_payment(console, receipt.grand_total()).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickbite_core::Money;
    use std::io::Cursor;

    fn burger_menu() -> Menu {
        let mut menu = Menu::new();
        menu.add_item("Burger", Money::from_cents(500)).unwrap();
        menu
    }

    #[test]
    fn test_empty_order_skips_payment() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        let outcome = checkout(&mut console, &Order::new(), &burger_menu()).unwrap();

        assert!(outcome.is_none());
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("No items ordered."));
        assert!(!out.contains("Please proceed to payment."));
    }

    #[test]
    fn test_receipt_then_payment() {
        let menu = burger_menu();
        let mut order = Order::new();
        order.add_selection(&menu, "1", "2").unwrap();

        let mut console = Console::new(Cursor::new("10.00\n"), Vec::new());
        let outcome = checkout(&mut console, &order, &menu).unwrap();

        assert!(matches!(
            outcome,
            Some(PaymentOutcome::Completed { change, .. }) if change.is_zero()
        ));

        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("--- Your Receipt ---"));
        assert!(out.contains("Burger              2       5.00      10.00"));
        assert!(out.contains("Total to pay: £10.00"));

        let receipt_at = out.find("Total to pay").unwrap();
        let payment_at = out.find("Please proceed to payment.").unwrap();
        assert!(receipt_at < payment_at);
    }

    #[test]
    fn test_oversized_total_skips_payment() {
        let menu = burger_menu();
        let mut order = Order::new();
        order
            .add_selection(&menu, "1", "100000000000000000")
            .unwrap();

        let mut console = Console::new(Cursor::new("10\n"), Vec::new());
        let outcome = checkout(&mut console, &order, &menu).unwrap();

        assert!(outcome.is_none());
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Order total for Burger is too large to charge."));
        assert!(!out.contains("--- Your Receipt ---"));
        assert!(!out.contains("Please proceed to payment."));
    }
}
