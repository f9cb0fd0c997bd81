//! # Menu Editor
//!
//! One edit per visit: add an item, remove an item, or change a price. The
//! edit goes through [`MenuStore`], which mutates the session's menu and
//! saves it.
//!
//! ## Outcome Messages
//! ```text
//! Ok                      → "Menu has been successfully updated."
//! index out of range      → "Invalid selection."
//! index not a number      → "Please enter a valid integer for the item number."
//! bad price / name        → "Invalid input: <reason>"
//! save failed             → "Failed to save menu: <reason>"   (edit kept in memory)
//! ```

use std::io::{BufRead, Write};

use quickbite_core::{Menu, ValidationError};
use quickbite_store::{MenuStore, StoreError, StoreResult};
use tracing::warn;

use crate::commands::order::list_items;
use crate::console::Console;
use crate::error::TerminalResult;

/// Shows the editor options and runs the chosen edit.
pub fn edit_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &MenuStore,
    menu: &mut Menu,
) -> TerminalResult<()> {
    console.blank()?;
    console.say("--- Menu Editor ---")?;
    console.say("1. Add a new item")?;
    console.say("2. Remove an item")?;
    console.say("3. Update an item's price")?;
    console.say("4. Exit")?;

    let choice = console.prompt("Select an option: ")?;
    match choice.trim() {
        "1" => add_item(console, store, menu),
        "2" => remove_item(console, store, menu),
        "3" => update_price(console, store, menu),
        "4" => console.say("Returning to the main menu."),
        _ => console.say("Invalid option. Returning to the main menu."),
    }
}

fn add_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &MenuStore,
    menu: &mut Menu,
) -> TerminalResult<()> {
    let name = console.prompt("Enter the name of the new item: ")?;
    let price = console.prompt("Enter the price of the new item: ")?;

    let result = store.add_item(menu, &name, &price).map(|_| ());
    report_edit(console, result)
}

fn remove_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &MenuStore,
    menu: &mut Menu,
) -> TerminalResult<()> {
    console.say("Select an item to remove:")?;
    list_items(console, menu)?;
    let index = console.prompt("Enter the number of the item to remove: ")?;

    let result = store.remove_item(menu, &index).map(|_| ());
    report_edit(console, result)
}

fn update_price<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &MenuStore,
    menu: &mut Menu,
) -> TerminalResult<()> {
    console.say("Select an item to update:")?;
    list_items(console, menu)?;
    let index = console.prompt("Enter the number of the item to update: ")?;

    // No price prompt for an item that does not exist.
    if let Err(e) = menu.parse_index(&index) {
        return report_edit(console, Err(e.into()));
    }

    let price = console.prompt("Enter the new price: ")?;
    let result = store.update_price(menu, &index, &price).map(|_| ());
    report_edit(console, result)
}

fn report_edit<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    result: StoreResult<()>,
) -> TerminalResult<()> {
    match result {
        Ok(()) => console.say("Menu has been successfully updated."),
        Err(e) if e.is_persistence() => {
            warn!(error = %e, "Menu edit kept in memory but not saved");
            console.say(format!("Failed to save menu: {}", e))
        }
        Err(e) => console.say(rejection_message(&e)),
    }
}

fn rejection_message(error: &StoreError) -> String {
    match error.as_validation() {
        Some(ValidationError::OutOfRange { .. }) => "Invalid selection.".to_string(),
        Some(ValidationError::InvalidFormat { field, .. }) if field == "item number" => {
            "Please enter a valid integer for the item number.".to_string()
        }
        _ => format!("Invalid input: {}", error),
    }
}
