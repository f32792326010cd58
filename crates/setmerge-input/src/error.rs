//! Error types for the input crate.

use std::path::PathBuf;

/// Errors produced while reading element sets or configuration.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Reading the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not valid TOML, or does not match the expected schema.
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The document parsed but its top level has the wrong shape.
    #[error("expected {expected}, got {actual}")]
    UnexpectedShape {
        expected: &'static str,
        actual: String,
    },

    /// An element has no lawful equality (e.g. a float) or is a map.
    #[error("unsupported element at index {index}: {reason}")]
    UnsupportedElement { index: usize, reason: String },

    /// The file extension does not name a known format.
    #[error("cannot infer set format from {0:?} (expected .json or .toml)")]
    UnknownFormat(PathBuf),
}

/// Result alias for input operations.
pub type InputResult<T> = Result<T, InputError>;
