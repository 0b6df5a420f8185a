//! Error types for family tree operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.
//! An [`update_marriage`](crate::FamilyTree::update_marriage) that matches nothing
//! is not an error; it returns `None`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for family tree operations.
pub type Result<T> = std::result::Result<T, FamilyTreeError>;

/// Error type for all family tree operations.
#[derive(Error, Debug)]
pub enum FamilyTreeError {
    /// No person or marriage has this identifier
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// ID of the missing node
        node_id: String,
    },

    /// Lookup by name matched nobody
    #[error("Person not found: {name}")]
    PersonNotFound {
        /// Name that was searched for
        name: String,
    },

    /// Lookup by name matched more than one person
    #[error("Multiple people named '{name}' ({count} matches), please provide the person ID")]
    AmbiguousMatch {
        /// Name that was searched for
        name: String,
        /// Number of people sharing the name
        count: usize,
    },

    /// Snapshot encoding or decoding failed
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Reading or writing a snapshot file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl FamilyTreeError {
    /// Create a not-found error for any displayable identifier.
    pub fn node_not_found(node_id: impl std::fmt::Display) -> Self {
        Self::NodeNotFound {
            node_id: node_id.to_string(),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create an I/O error bound to the file that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the lookup target does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound { .. } | Self::PersonNotFound { .. })
    }
}
