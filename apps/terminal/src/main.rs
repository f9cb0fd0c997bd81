//! # QuickBite Terminal Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load the menu (default menu if menu.json is unusable)
//! 3. Run the session on stdin/stdout until `Exit` or end of input

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    quickbite_terminal_lib::run()
}
