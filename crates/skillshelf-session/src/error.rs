//! Error types for disclosure sessions

use skillshelf_types::LoadLevel;
use thiserror::Error;

/// Disclosure session errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Requested document does not exist in the store
    #[error("Document not found: '{0}'")]
    NotFound(String),

    /// Operation requested out of load-level order
    ///
    /// A programming error in the caller: levels only move forward, and
    /// `expand` requires a prior `activate`. Never retried.
    #[error("Invalid state for '{name}': requires at least {required:?}, currently {actual:?}")]
    InvalidState {
        /// Document the operation targeted
        name: String,
        /// Minimum level the operation requires
        required: LoadLevel,
        /// Level the session actually holds
        actual: LoadLevel,
    },
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, SessionError>;
