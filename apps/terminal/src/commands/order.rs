//! # Order Commands
//!
//! Lists the menu and builds an [`Order`] from item/quantity prompts.
//!
//! ## Order Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Enter the menu item number to order (or 'done' to finish): "         │
//! │       │                                                                 │
//! │       ├── done (any case) ─────────────────────► return Order          │
//! │       ├── not a valid number ──► "Invalid choice" ──► ask again        │
//! │       └── valid number                                                  │
//! │              │                                                          │
//! │              ▼                                                          │
//! │       "Enter the quantity: " (repeats until a positive integer)        │
//! │              │                                                          │
//! │              ▼                                                          │
//! │       Order::add_selection ──► "Added 2 x Burger..." ──► ask again     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use quickbite_core::validation::is_done;
use quickbite_core::{CoreError, Menu, Order, ValidationError};
use tracing::info;

use crate::console::Console;
use crate::error::TerminalResult;

/// Prints the numbered menu under the "Today's Menu" heading.
pub fn display_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    menu: &Menu,
) -> TerminalResult<()> {
    console.blank()?;
    console.say("--- Today's Menu ---")?;
    list_items(console, menu)
}

/// Prints `n. name - £price` for every item, numbered from 1.
pub(crate) fn list_items<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    menu: &Menu,
) -> TerminalResult<()> {
    if menu.is_empty() {
        return console.say("(the menu is empty)");
    }

    for (i, item) in menu.iter().enumerate() {
        console.say(format!("{}. {}", i + 1, item))?;
    }
    Ok(())
}

/// Runs the order loop until the customer types `done`.
///
/// The returned order may be empty.
pub fn take_order<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    menu: &Menu,
) -> TerminalResult<Order> {
    console.blank()?;
    console.say("--- Place Your Order ---")?;
    display_menu(console, menu)?;

    let mut order = Order::new();

    loop {
        console.blank()?;
        let choice = console.prompt("Enter the menu item number to order (or 'done' to finish): ")?;
        if is_done(&choice) {
            break;
        }

        match menu.select(&choice) {
            Ok(item) => add_quantity(console, menu, &mut order, &choice, item.name())?,
            Err(_) => console.say("Invalid choice. Please try again.")?,
        }
    }

    info!(
        order_id = %order.id(),
        items = order.item_count(),
        quantity = order.total_quantity(),
        "Order taken"
    );
    Ok(order)
}

/// Asks for a quantity until one is accepted for the chosen item.
///
/// An accepted quantity that cannot be added (the line would overflow) is
/// reported and the item prompt comes back.
fn add_quantity<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    menu: &Menu,
    order: &mut Order,
    choice: &str,
    name: &str,
) -> TerminalResult<()> {
    let before = order.quantity_of(name);

    loop {
        let input = console.prompt("Enter the quantity: ")?;
        match order.add_selection(menu, choice, &input) {
            Ok(now) => {
                return console.say(format!(
                    "Added {} x {} to your order.",
                    now - before,
                    name
                ));
            }
            Err(CoreError::Validation(ValidationError::MustBePositive { .. })) => {
                console.say("Please choose at least 1 item. Thank you.")?
            }
            Err(CoreError::Validation(ValidationError::InvalidFormat { .. })) => {
                console.say("Invalid input. Please enter a valid integer.")?
            }
            Err(e) => return console.say(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickbite_core::Money;
    use std::io::Cursor;

    fn test_menu() -> Menu {
        let mut menu = Menu::new();
        menu.add_item("Burger", Money::from_cents(500)).unwrap();
        menu.add_item("Fries", Money::from_cents(250)).unwrap();
        menu
    }

    fn run_order(input: &str) -> (Order, String) {
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
        let order = take_order(&mut console, &test_menu()).unwrap();
        (order, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_display_menu() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        display_menu(&mut console, &test_menu()).unwrap();

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(
            out,
            "\n--- Today's Menu ---\n1. Burger - £5.00\n2. Fries - £2.50\n"
        );
    }

    #[test]
    fn test_take_order_accumulates() {
        let (order, out) = run_order("1\n2\n2\n1\n1\n3\nDONE\n");

        assert_eq!(order.quantity_of("Burger"), 5);
        assert_eq!(order.quantity_of("Fries"), 1);
        assert!(out.contains("Added 2 x Burger to your order."));
        assert!(out.contains("Added 3 x Burger to your order."));
    }

    #[test]
    fn test_take_order_rejects_bad_choice() {
        let (order, out) = run_order("abc\n0\n9\ndone\n");

        assert!(order.is_empty());
        assert_eq!(out.matches("Invalid choice. Please try again.").count(), 3);
        assert!(!out.contains("Enter the quantity"));
    }

    #[test]
    fn test_quantity_reprompts_until_valid() {
        let (order, out) = run_order("2\nx\n0\n-3\n4\ndone\n");

        assert_eq!(order.quantity_of("Fries"), 4);
        assert_eq!(
            out.matches("Invalid input. Please enter a valid integer.").count(),
            1
        );
        assert_eq!(
            out.matches("Please choose at least 1 item. Thank you.").count(),
            2
        );
    }

    #[test]
    fn test_quantity_overflow_returns_to_item_prompt() {
        let max = i64::MAX.to_string();
        let (order, out) = run_order(&format!("1\n{max}\n1\n1\ndone\n"));

        assert_eq!(order.quantity_of("Burger"), i64::MAX);
        assert!(out.contains("Quantity for Burger would exceed"));
        assert_eq!(
            out.matches("Enter the menu item number to order").count(),
            3
        );
    }

    #[test]
    fn test_done_immediately_gives_empty_order() {
        let (order, _) = run_order("done\n");
        assert!(order.is_empty());
    }
}
