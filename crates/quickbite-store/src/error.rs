//! # Store Error Types
//!
//! Error types for menu persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / ValidationError                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path and categorization      │
//! │       │                                                                 │
//! │       ├── on load:  logged, fallback menu returned                     │
//! │       └── on edit:  returned to the menu editor, printed               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use quickbite_core::ValidationError;
use thiserror::Error;

/// Menu persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The menu file could not be read or written.
    ///
    /// ## When This Occurs
    /// - File missing on load
    /// - Permission denied
    /// - Parent directory missing on save
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not JSON, or not the expected array of records.
    ///
    /// Record-level rule failures (blank name, negative price, duplicate
    /// name) also land here, reported through serde.
    #[error("menu file is malformed: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The menu could not be encoded for writing.
    #[error("menu could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),

    /// An edit was rejected before anything changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the failure happened while touching the file.
    ///
    /// For edit operations this means the in-memory menu WAS changed but the
    /// change was not saved; any other error means nothing changed.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            StoreError::Io { .. } | StoreError::Malformed(_) | StoreError::Encode(_)
        )
    }

    /// The validation failure behind an edit rejection, if any.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            StoreError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
