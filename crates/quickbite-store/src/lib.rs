//! # quickbite-store: Menu Persistence for the QuickBite Terminal
//!
//! This crate reads and writes `menu.json` and applies menu edits.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       QuickBite Data Flow                               │
//! │                                                                         │
//! │  Session start / Menu editor                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 quickbite-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────────────────────┐    │   │
//! │  │   │  StoreConfig  │    │           MenuStore              │    │   │
//! │  │   │  (config.rs)  │───►│  load / try_load / save          │    │   │
//! │  │   │  menu path    │    │  add_item / remove_item /        │    │   │
//! │  │   └───────────────┘    │  update_price                    │    │   │
//! │  │                        └──────────────────────────────────┘    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  menu.json  [{"name": "...", "price": 0.0}, ...]                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quickbite_store::{MenuStore, StoreConfig};
//!
//! let store = MenuStore::new(StoreConfig::new("menu.json"));
//!
//! // Never fails: falls back to the default menu on any problem.
//! let mut menu = store.load();
//!
//! store.add_item(&mut menu, "Chips", "2.50").ok();
//! ```

pub mod config;
pub mod error;
pub mod menu_store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use menu_store::MenuStore;
