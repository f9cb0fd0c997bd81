//! # QuickBite Terminal Library
//!
//! Console front end for the QuickBite ordering workflow.
//!
//! ## Module Organization
//! ```text
//! quickbite_terminal_lib/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── config.rs       ◄─── Store name, menu path
//! ├── console.rs      ◄─── Line-oriented prompt/response over BufRead + Write
//! ├── session.rs      ◄─── Main menu loop, owns the Menu
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── order.rs    ◄─── Menu listing and order taking
//! │   ├── checkout.rs ◄─── Receipt, then payment
//! │   ├── payment.rs  ◄─── Cash payment prompts
//! │   └── menu.rs     ◄─── Menu editor
//! └── error.rs        ◄─── Terminal error type
//! ```
//!
//! ## Ownership
//! There is no global state. The [`Session`] owns the `Menu` and lends it to
//! each command: `&Menu` for ordering and checkout, `&mut Menu` for the
//! editor. Every edit is saved before the next prompt appears.

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod session;

use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use config::TerminalConfig;
pub use console::Console;
pub use error::{TerminalError, TerminalResult};
pub use session::Session;

/// Runs the terminal on stdin/stdout.
///
/// ## Exit Codes
/// - `0` after `Exit` or when input ends
/// - `1` if the console itself fails (e.g. stdout closed)
pub fn run() -> ExitCode {
    init_tracing();

    let config = TerminalConfig::default();
    info!(menu_path = %config.menu_path.display(), "Starting QuickBite terminal");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    let mut session = Session::start(config, console);
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Terminal failed");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: WARN, INFO for the quickbite crates (edits, orders, payments)
/// - `RUST_LOG=debug` - menu load/save details
///
/// Logs go to stderr so they never mix with the prompts on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,quickbite=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
