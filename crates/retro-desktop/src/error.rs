//! Error types for the window manager
//!
//! None of these errors cross the command boundary: the store swallows
//! referential errors and the persistence adapter degrades to "no saved
//! state". They exist for the internal lookups and the storage backends.

use crate::types::WindowId;

/// Errors that can occur in window manager operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// Window with the given ID was not found
    WindowNotFound(WindowId),

    /// An operation was attempted that is not valid in the current state
    InvalidOperation {
        /// The operation that was attempted
        op: &'static str,
        /// Why the operation failed
        reason: &'static str,
    },

    /// A layout name did not match any tiling strategy
    UnknownLayout(String),

    /// JSON serialization or deserialization failed
    SerializationError(String),

    /// The key-value backend rejected a read or write
    StorageError(String),

    /// Persistence operation failed
    PersistenceError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::InvalidOperation { op, reason } => {
                write!(f, "invalid operation '{}': {}", op, reason)
            }
            Self::UnknownLayout(name) => write!(f, "unknown tile layout: {}", name),
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            Self::StorageError(msg) => write!(f, "storage error: {}", msg),
            Self::PersistenceError(msg) => write!(f, "persistence error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Result type alias for window manager operations
pub type DesktopResult<T> = Result<T, DesktopError>;
