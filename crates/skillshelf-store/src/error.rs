//! Error types for document store operations

use std::path::PathBuf;
use thiserror::Error;

/// Document store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Requested document does not exist in the store
    #[error("Document not found: '{0}'")]
    NotFound(String),

    /// A document failed to parse (missing frontmatter, missing field)
    ///
    /// Fatal to that one document only; the rest of the store still loads.
    #[error("Malformed document at '{path}': {reason}")]
    MalformedDocument {
        /// Source file
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// Two documents share the same name
    ///
    /// Fatal to the whole load; the ambiguity cannot be resolved here.
    #[error("Duplicate document name '{name}' at '{path}'")]
    DuplicateName {
        /// The contested name
        name: String,
        /// The second file claiming it
        path: PathBuf,
    },

    /// Source path is missing or not a directory
    #[error("Documents path is not a directory: '{0}'")]
    NotADirectory(PathBuf),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, StoreError>;
