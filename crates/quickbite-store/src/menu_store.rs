//! # Menu Store
//!
//! Loading, saving and editing the persisted menu.
//!
//! ## Load Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How load() Never Fails                               │
//! │                                                                         │
//! │  read menu.json ──── missing / unreadable ───┐                          │
//! │       │                                      │                          │
//! │       ▼                                      │                          │
//! │  decode as [MenuItem] ── not JSON / wrong ───┤                          │
//! │       │                  shape / bad record  │                          │
//! │       ▼                                      ▼                          │
//! │  Menu (validated)                warn!(...) + Menu::fallback()          │
//! │                                  [Default Pizza £10.00]                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Edit Policy
//! Every edit validates first. A rejected edit leaves the menu untouched and
//! returns `StoreError::Validation`. An accepted edit mutates the menu and
//! then saves; if the save fails the edit is kept in memory and the error is
//! returned with `is_persistence() == true`.

use std::fs;
use std::path::Path;

use quickbite_core::{Menu, MenuItem, Money};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info, warn};

use crate::config::{StoreConfig, MENU_INDENT};
use crate::error::{StoreError, StoreResult};

/// Result of [`MenuStore::load_with_report`].
#[derive(Debug)]
pub struct LoadedMenu {
    pub menu: Menu,
    /// Why the fallback menu was used, if it was.
    pub fallback_reason: Option<StoreError>,
}

/// File-backed menu storage.
///
/// ## Usage
/// ```rust,no_run
/// use quickbite_store::{MenuStore, StoreConfig};
///
/// let store = MenuStore::new(StoreConfig::default());
/// let mut menu = store.load();
///
/// match store.remove_item(&mut menu, "2") {
///     Ok(item) => println!("removed {}", item.name()),
///     Err(e) if e.is_persistence() => println!("removed, but not saved: {e}"),
///     Err(e) => println!("nothing changed: {e}"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MenuStore {
    config: StoreConfig,
}

impl MenuStore {
    pub fn new(config: StoreConfig) -> Self {
        MenuStore { config }
    }

    pub fn path(&self) -> &Path {
        self.config.menu_path()
    }

    // =========================================================================
    // Load / Save
    // =========================================================================

    /// Loads the menu, falling back to the default menu on any failure.
    pub fn load(&self) -> Menu {
        self.load_with_report().menu
    }

    /// Like [`load`](Self::load), but also reports why the fallback was used.
    pub fn load_with_report(&self) -> LoadedMenu {
        match self.try_load() {
            Ok(menu) => LoadedMenu {
                menu,
                fallback_reason: None,
            },
            Err(e) => {
                warn!(path = %self.path().display(), error = %e, "Failed to load menu, using default menu");
                LoadedMenu {
                    menu: Menu::fallback(),
                    fallback_reason: Some(e),
                }
            }
        }
    }

    /// Loads and validates the menu, returning the typed failure.
    pub fn try_load(&self) -> StoreResult<Menu> {
        let path = self.path();
        let text = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let menu: Menu = serde_json::from_str(&text).map_err(StoreError::Malformed)?;

        debug!(path = %path.display(), items = menu.len(), "Menu loaded");
        Ok(menu)
    }

    /// Writes the whole menu, replacing the previous file contents.
    pub fn save(&self, menu: &Menu) -> StoreResult<()> {
        let path = self.path();
        let result = self
            .encode(menu)
            .and_then(|json| fs::write(path, json).map_err(|e| StoreError::io(path, e)));

        match &result {
            Ok(()) => debug!(path = %path.display(), items = menu.len(), "Menu saved"),
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to save menu"),
        }
        result
    }

    /// Pretty JSON with 4-space indentation and a trailing newline.
    fn encode(&self, menu: &Menu) -> StoreResult<String> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(MENU_INDENT));
        menu.serialize(&mut serializer).map_err(StoreError::Encode)?;
        buf.push(b'\n');

        // serde_json only emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Appends a new item and saves.
    ///
    /// ## Errors
    /// - price text not a non-negative decimal → `Validation`
    /// - blank, too long or duplicate name → `Validation`
    /// - save failure → persistence error (item kept in memory)
    pub fn add_item(&self, menu: &mut Menu, name: &str, price_input: &str) -> StoreResult<MenuItem> {
        let price = Money::parse(price_input, "price")?;
        let item = menu.add_item(name, price)?.clone();

        info!(name = %item.name(), price = %item.price(), "Menu item added");
        self.save(menu)?;
        Ok(item)
    }

    /// Removes the item at the 1-based position typed by the user and saves.
    ///
    /// ## Errors
    /// - index text not an integer → `Validation(InvalidFormat)`
    /// - index outside `1..=len` → `Validation(OutOfRange)`
    /// - save failure → persistence error (item already removed in memory)
    pub fn remove_item(&self, menu: &mut Menu, index_input: &str) -> StoreResult<MenuItem> {
        let index = menu.parse_index(index_input)?;
        let removed = menu.remove_item(index)?;

        info!(index, name = %removed.name(), "Menu item removed");
        self.save(menu)?;
        Ok(removed)
    }

    /// Replaces the price of the item at a 1-based position and saves.
    ///
    /// The index is checked before the price, so a bad index is reported
    /// even when the price is also bad. Returns the previous price.
    pub fn update_price(
        &self,
        menu: &mut Menu,
        index_input: &str,
        price_input: &str,
    ) -> StoreResult<Money> {
        let index = menu.parse_index(index_input)?;
        let price = Money::parse(price_input, "price")?;
        let old = menu.update_price(index, price)?;

        info!(index, old = %old, new = %price, "Menu price updated");
        self.save(menu)?;
        Ok(old)
    }
}
