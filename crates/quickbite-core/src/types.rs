//! # Domain Types
//!
//! The menu: what the vendor sells and at what price.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────────┐        ┌─────────────────┐                │
//! │  │          Menu           │ 1    * │    MenuItem     │                │
//! │  │  ─────────────────────  │───────►│  ─────────────  │                │
//! │  │  items: Vec<MenuItem>   │        │  name (unique)  │                │
//! │  │  1-based positions      │        │  price: Money   │                │
//! │  └─────────────────────────┘        └─────────────────┘                │
//! │                                                                         │
//! │  JSON boundary:  [{"name": "Burger", "price": 5.0}, ...]               │
//! │       │                                                                 │
//! │       ▼  serde(try_from = "MenuItemRecord")                            │
//! │  MenuItem (validated)  ──►  Menu (unique names, validated)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed records never make it past deserialization: a missing field or
//! a string price is a serde error, and a negative price, blank name or
//! duplicate name is a [`ValidationError`] surfaced through serde.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{parse_index, validate_item_name, validate_price_cents, ValidationResult};
use crate::{DEFAULT_ITEM_NAME, DEFAULT_ITEM_PRICE_CENTS};

// =============================================================================
// Menu Item
// =============================================================================

/// A single purchasable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MenuItemRecord", into = "MenuItemRecord")]
pub struct MenuItem {
    name: String,
    price: Money,
}

impl MenuItem {
    /// Creates a validated menu item.
    pub fn new(name: &str, price: Money) -> ValidationResult<Self> {
        let name = validate_item_name(name)?;
        validate_price_cents(price.cents())?;
        Ok(MenuItem { name, price })
    }

    /// Display name, also the key orders are recorded under.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

/// `Burger - £5.00`
impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.price)
    }
}

/// Wire shape of one `menu.json` element.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MenuItemRecord {
    name: String,
    price: f64,
}

impl TryFrom<MenuItemRecord> for MenuItem {
    type Error = ValidationError;

    fn try_from(record: MenuItemRecord) -> Result<Self, Self::Error> {
        let price = Money::from_json_price(record.price, "price")?;
        MenuItem::new(&record.name, price)
    }
}

impl From<MenuItem> for MenuItemRecord {
    fn from(item: MenuItem) -> Self {
        MenuItemRecord {
            price: item.price.to_json_price(),
            name: item.name,
        }
    }
}

// =============================================================================
// Menu
// =============================================================================

/// Ordered list of items, addressed by 1-based position in prompts.
///
/// ## Invariants
/// - Every item has a non-empty name and a non-negative price
/// - Names are unique (orders are keyed by name)
///
/// All mutators validate first and leave the menu untouched on error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MenuItem>", into = "Vec<MenuItem>")]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Creates an empty menu.
    pub fn new() -> Self {
        Menu { items: Vec::new() }
    }

    /// The menu served when the persisted one cannot be loaded:
    /// a single "Default Pizza" at £10.00.
    pub fn fallback() -> Self {
        Menu {
            items: vec![MenuItem {
                name: DEFAULT_ITEM_NAME.to_string(),
                price: Money::from_cents(DEFAULT_ITEM_PRICE_CENTS),
            }],
        }
    }

    /// Builds a menu from items, rejecting duplicate names.
    pub fn from_items(items: Vec<MenuItem>) -> ValidationResult<Self> {
        let mut menu = Menu::new();
        for item in items {
            menu.ensure_unique(item.name())?;
            menu.items.push(item);
        }
        Ok(menu)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at a 1-based position.
    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        index.checked_sub(1).and_then(|i| self.items.get(i))
    }

    /// Parses a 1-based position typed by the user and returns the item.
    pub fn select(&self, input: &str) -> ValidationResult<&MenuItem> {
        let index = self.parse_index(input)?;
        Ok(&self.items[index - 1])
    }

    /// Parses a 1-based position typed by the user.
    pub fn parse_index(&self, input: &str) -> ValidationResult<usize> {
        parse_index(input, self.items.len(), "item number")
    }

    /// Current price of the item with this name.
    pub fn price_of(&self, name: &str) -> Option<Money> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.price)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Appends a new item.
    pub fn add_item(&mut self, name: &str, price: Money) -> ValidationResult<&MenuItem> {
        let item = MenuItem::new(name, price)?;
        self.ensure_unique(item.name())?;
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Removes the item at a 1-based position and returns it.
    pub fn remove_item(&mut self, index: usize) -> ValidationResult<MenuItem> {
        let position = self.position(index)?;
        Ok(self.items.remove(position))
    }

    /// Replaces the price of the item at a 1-based position.
    ///
    /// Returns the previous price.
    pub fn update_price(&mut self, index: usize, price: Money) -> ValidationResult<Money> {
        validate_price_cents(price.cents())?;
        let position = self.position(index)?;
        let item = &mut self.items[position];
        Ok(std::mem::replace(&mut item.price, price))
    }

    fn position(&self, index: usize) -> ValidationResult<usize> {
        if index == 0 || index > self.items.len() {
            return Err(ValidationError::OutOfRange {
                field: "item number".to_string(),
                min: 1,
                max: i64::try_from(self.items.len()).unwrap_or(i64::MAX),
            });
        }
        Ok(index - 1)
    }

    fn ensure_unique(&self, name: &str) -> ValidationResult<()> {
        if self.contains(name) {
            return Err(ValidationError::Duplicate {
                field: "name".to_string(),
                value: name.to_string(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<MenuItem>> for Menu {
    type Error = ValidationError;

    fn try_from(items: Vec<MenuItem>) -> Result<Self, Self::Error> {
        Menu::from_items(items)
    }
}

impl From<Menu> for Vec<MenuItem> {
    fn from(menu: Menu) -> Self {
        menu.items
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
