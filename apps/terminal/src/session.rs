//! # Session
//!
//! The main menu loop. The session owns the [`Menu`] for its whole lifetime
//! and lends it to each command.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  start()                                                                │
//! │    └── MenuStore::load_with_report (default menu on any failure)       │
//! │                                                                         │
//! │  run()                                                                  │
//! │    ├── "Welcome to QuickBite!"                                          │
//! │    └── loop: Main Menu                                                  │
//! │          ├── 1 → take_order → checkout (receipt + payment)             │
//! │          ├── 2 → edit_menu                                              │
//! │          ├── 3 → goodbye, return                                        │
//! │          └── other → "Invalid option", ask again                        │
//! │                                                                         │
//! │  End of input at any prompt also ends the session cleanly.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use quickbite_core::Menu;
use quickbite_store::{MenuStore, StoreError};
use tracing::info;

use crate::commands::{checkout, edit_menu, take_order};
use crate::config::TerminalConfig;
use crate::console::Console;
use crate::error::{TerminalError, TerminalResult};

pub struct Session<R, W> {
    config: TerminalConfig,
    store: MenuStore,
    menu: Menu,
    console: Console<R, W>,
    load_failure: Option<StoreError>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Loads the menu from the configured path and prepares the session.
    pub fn start(config: TerminalConfig, console: Console<R, W>) -> Self {
        let store = MenuStore::new(config.store_config());
        let loaded = store.load_with_report();

        Session {
            config,
            store,
            menu: loaded.menu,
            console,
            load_failure: loaded.fallback_reason,
        }
    }

    /// The menu as it currently stands, including unsaved edits.
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs until `Exit` is chosen or input ends.
    ///
    /// ## Errors
    /// Only console I/O failures; end of input is a normal exit.
    pub fn run(&mut self) -> TerminalResult<()> {
        match self.main_loop() {
            Err(TerminalError::InputClosed) => {
                info!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn main_loop(&mut self) -> TerminalResult<()> {
        if let Some(e) = self.load_failure.take() {
            self.console.say(format!(
                "Failed to load menu: {}. A default menu will be used instead.",
                e
            ))?;
        }

        self.console
            .say(format!("Welcome to {}!", self.config.store_name))?;

        loop {
            self.console.blank()?;
            self.console.say("Main Menu:")?;
            self.console.say("1. Place an order")?;
            self.console.say("2. Edit the menu")?;
            self.console.say("3. Exit")?;

            let choice = self.console.prompt("Please choose an option: ")?;
            match choice.trim() {
                "1" => self.place_order()?,
                "2" => edit_menu(&mut self.console, &self.store, &mut self.menu)?,
                "3" => {
                    self.console.say(format!(
                        "Thank you for visiting {}. Goodbye!",
                        self.config.store_name
                    ))?;
                    return Ok(());
                }
                _ => self.console.say("Invalid option, please try again.")?,
            }
        }
    }

    fn place_order(&mut self) -> TerminalResult<()> {
        let order = take_order(&mut self.console, &self.menu)?;
        checkout(&mut self.console, &order, &self.menu)?;
        Ok(())
    }
}
