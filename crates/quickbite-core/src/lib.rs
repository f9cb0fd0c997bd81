//! # quickbite-core: Pure Business Logic for the QuickBite Terminal
//!
//! This crate is the **heart** of the QuickBite terminal. It contains every
//! business rule as plain functions over owned values, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     QuickBite Terminal Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/terminal (console session)                 │   │
//! │  │    Main Menu ──► Take Order ──► Receipt ──► Payment            │   │
//! │  │        └──────► Menu Editor                                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ quickbite-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  types   │ │  order   │ │ receipt  │ │ payment  │          │   │
//! │  │   │ MenuItem │ │  Order   │ │ Receipt  │ │ Payment  │          │   │
//! │  │   │   Menu   │ │OrderLine │ │  Lines   │ │ Session  │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐                        │   │
//! │  │   │  money   │ │validation│ │  error   │                        │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘                        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               quickbite-store (menu.json)                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Menu and MenuItem
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`order`] - Order accumulation
//! - [`receipt`] - Receipt computation and table rendering
//! - [`payment`] - Cash payment state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Input parsing and business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use quickbite_core::{Menu, Money, Order, Receipt};
//!
//! let mut menu = Menu::new();
//! menu.add_item("Burger", Money::from_cents(500)).unwrap();
//!
//! let mut order = Order::new();
//! order.add_selection(&menu, "1", "2").unwrap();
//!
//! let receipt = Receipt::compute(&order, &menu).unwrap();
//! assert_eq!(receipt.grand_total(), Money::from_cents(1000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod payment;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderLine};
pub use payment::{PaymentOutcome, PaymentSession, PaymentState};
pub use receipt::{Receipt, ReceiptLine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name of the single item served when the persisted menu cannot be used.
pub const DEFAULT_ITEM_NAME: &str = "Default Pizza";

/// Price of the fallback item, in pence.
pub const DEFAULT_ITEM_PRICE_CENTS: i64 = 1000;

/// Maximum length of a menu item name.
pub const MAX_ITEM_NAME_LEN: usize = 100;
