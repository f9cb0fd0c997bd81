//! # Store Configuration

use std::path::{Path, PathBuf};

/// Default menu file, relative to the working directory.
pub const DEFAULT_MENU_PATH: &str = "menu.json";

/// Indentation used when writing `menu.json`.
pub const MENU_INDENT: &[u8] = b"    ";

/// Menu store configuration.
///
/// ## Example
/// ```rust
/// use quickbite_store::StoreConfig;
///
/// let config = StoreConfig::new("/srv/quickbite/menu.json");
/// assert_eq!(config.menu_path(), std::path::Path::new("/srv/quickbite/menu.json"));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the menu JSON file.
    pub menu_path: PathBuf,
}

impl StoreConfig {
    /// Creates a configuration for the given menu file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            menu_path: path.into(),
        }
    }

    pub fn menu_path(&self) -> &Path {
        &self.menu_path
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(DEFAULT_MENU_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path() {
        let config = StoreConfig::new("/tmp/menu.json");
        assert_eq!(config.menu_path(), Path::new("/tmp/menu.json"));
    }

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.menu_path(), Path::new("menu.json"));
    }
}
