//! # Terminal Error Type
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Terminal                           │
//! │                                                                         │
//! │  ValidationError / CoreError / StoreError                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  printed by the command, prompt loop continues                         │
//! │                                                                         │
//! │  TerminalError (this module)                                            │
//! │       │                                                                 │
//! │       ├── InputClosed → session ends normally                          │
//! │       └── Io          → session ends, process exits non-zero           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only console failures ever leave a prompt loop.

use thiserror::Error;

/// Console failures.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Reading from stdin or writing to stdout failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// stdin reached end of file while a prompt was waiting.
    #[error("input closed")]
    InputClosed,
}

/// Result type for console operations.
pub type TerminalResult<T> = Result<T, TerminalError>;
