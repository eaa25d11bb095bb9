//! Error types for the settings mutation path.

use std::path::PathBuf;

/// Errors raised while loading or mutating the settings document.
///
/// Only the mutation path produces these; scanning degrades to empty
/// results instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum HooksError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in {path}: {source}")]
    InvalidSettings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown event type: {0}")]
    UnknownEvent(String),

    #[error("Hook '{name}' already exists for event {event}")]
    DuplicateHook { name: String, event: String },

    #[error("Invalid import file format: {0}")]
    InvalidImport(String),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
}
