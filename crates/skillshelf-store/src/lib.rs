//! Skillshelf document store
//!
//! Loads a directory of markdown documents with YAML frontmatter into an
//! immutable, name-keyed store. This is level zero of progressive
//! disclosure: after `load_all`, every document's metadata is available for
//! matching, and nothing else has been surfaced to the session.
//!
//! Load semantics:
//! - A malformed document (missing frontmatter, missing name/description)
//!   is skipped with a warning; its siblings still load.
//! - Duplicate names abort the whole load.

pub mod document;
pub mod error;
pub mod store;

pub use error::{Result, StoreError};
pub use store::{DocumentStore, LoadReport, SkippedDocument};
