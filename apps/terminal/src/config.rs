//! # Terminal Configuration
//!
//! Settings fixed at startup. The terminal takes no flags and reads no
//! environment variables (apart from `RUST_LOG` for log verbosity), so the
//! defaults below are what runs.
//!
//! Amounts are always shown through `Money`'s `Display` (`£12.34`), so the
//! currency is not configured here.
//!
//! Read-only after initialization.

use std::path::PathBuf;

use quickbite_store::config::DEFAULT_MENU_PATH;
use quickbite_store::StoreConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    /// Shown in the greeting and farewell
    pub store_name: String,

    /// Where the menu is persisted
    pub menu_path: PathBuf,
}

impl Default for TerminalConfig {
    /// ## Default Values
    /// - Store: "QuickBite"
    /// - Menu: `menu.json` in the working directory
    fn default() -> Self {
        TerminalConfig {
            store_name: "QuickBite".to_string(),
            menu_path: PathBuf::from(DEFAULT_MENU_PATH),
        }
    }
}

impl TerminalConfig {
    /// Points the terminal at a different menu file.
    pub fn with_menu_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.menu_path = path.into();
        self
    }

    /// Store settings derived from this configuration.
    ///
    /// ## Example
    /// ```rust
    /// use quickbite_terminal_lib::TerminalConfig;
    ///
    /// let config = TerminalConfig::default().with_menu_path("/srv/menu.json");
    /// assert_eq!(
    ///     config.store_config().menu_path(),
    ///     std::path::Path::new("/srv/menu.json")
    /// );
    /// ```
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.menu_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TerminalConfig::default();
        assert_eq!(config.store_name, "QuickBite");
        assert_eq!(config.menu_path, PathBuf::from("menu.json"));
    }

    #[test]
    fn test_store_config_follows_menu_path() {
        let config = TerminalConfig::default().with_menu_path("/tmp/quickbite.json");
        assert_eq!(
            config.store_config().menu_path(),
            std::path::Path::new("/tmp/quickbite.json")
        );
    }
}
