//! # Terminal Commands
//!
//! Each command runs one interactive flow on the [`Console`](crate::Console)
//! and returns to the main menu.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── order.rs     ◄─── Menu listing, item and quantity prompts
//! ├── checkout.rs  ◄─── Receipt, then payment
//! ├── payment.rs   ◄─── Cash tender and retry prompts
//! └── menu.rs      ◄─── Menu editor (add / remove / update price)
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Session (main menu)                                                    │
//! │       │                                                                 │
//! │       ├── "1" ──► take_order ──► checkout ──► process_payment           │
//! │       │            (&Menu)        (&Menu)       (total only)            │
//! │       │                                                                 │
//! │       └── "2" ──► edit_menu (&mut Menu, &MenuStore)                     │
//! │                                                                         │
//! │  Business rules live in quickbite-core / quickbite-store; commands     │
//! │  only prompt, call, and print the outcome.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod checkout;
pub mod menu;
pub mod order;
pub mod payment;

pub use checkout::checkout;
pub use menu::edit_menu;
pub use order::{display_menu, take_order};
pub use payment::process_payment;
