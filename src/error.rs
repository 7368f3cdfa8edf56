//! Error types for board setup and lookups

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or driving the board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No registered component has this identifier
    #[error("unknown component '{0}'")]
    UnknownComponent(String),

    /// An element the layout expects is absent
    #[error("missing element: {0}")]
    MissingElement(String),

    /// Two registry records share an identifier
    #[error("duplicate component id '{0}'")]
    DuplicateComponent(String),

    /// A key name in the config could not be parsed
    #[error("invalid key name '{0}' (expected F1-F12 or a single character)")]
    InvalidKey(String),

    /// The config file exists but could not be read or parsed
    #[error("failed to load config {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },
}
