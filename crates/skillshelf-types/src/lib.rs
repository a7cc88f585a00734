//! Skillshelf Types - Core types for the skillshelf document system
//!
//! This module defines the data model shared by the store, matcher,
//! resolver, and session crates.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The name + description pair for a document.
///
/// This is the only input the trigger matcher is allowed to see: ranking
/// works on metadata alone, so its cost never depends on body size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Unique document name (lowercase letters, digits, hyphens).
    pub name: String,
    /// Free-text description used for relevance matching. Never empty.
    pub description: String,
}

/// A fully loaded document: metadata, body, and the path it came from.
///
/// Documents are created once at store-load time and never mutated.
#[derive(Debug, Clone)]
pub struct Document {
    /// Metadata parsed from the YAML frontmatter.
    pub metadata: DocumentMetadata,
    /// Everything after the frontmatter delimiter.
    pub body: String,
    /// Source file the document was parsed from.
    pub path: PathBuf,
}

impl Document {
    /// The document name.
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// The document description.
    pub fn description(&self) -> &str {
        &self.metadata.description
    }

    /// Summary line for listings.
    /// Format: "- {name}: {description}"
    pub fn to_summary(&self) -> String {
        format!("- {}: {}", self.metadata.name, self.metadata.description)
    }
}

/// A link from one document's body to another document.
///
/// The target is a relative name or path; an optional fragment points at an
/// anchor inside the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLink {
    /// Target document, as written in the source body.
    pub target: String,
    /// Anchor fragment, without the leading `#`.
    pub fragment: Option<String>,
}

impl ReferenceLink {
    /// Build a link, splitting an optional `#fragment` off the raw target.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('#') {
            Some((target, fragment)) if !fragment.is_empty() => Self {
                target: target.to_string(),
                fragment: Some(fragment.to_string()),
            },
            Some((target, _)) => Self {
                target: target.to_string(),
                fragment: None,
            },
            None => Self {
                target: raw.to_string(),
                fragment: None,
            },
        }
    }

    /// The target normalized to a plain document name: `./guide.md` -> `guide`.
    pub fn target_name(&self) -> &str {
        let target = self.target.strip_prefix("./").unwrap_or(&self.target);
        target.strip_suffix(".md").unwrap_or(target)
    }
}

/// How much of a document the current session has disclosed.
///
/// Levels only move forward: `Unloaded -> MetadataLoaded -> BodyLoaded`,
/// terminal at `BodyLoaded`. There is no deactivation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadLevel {
    /// Nothing disclosed yet.
    #[default]
    Unloaded,
    /// Name and description have been surfaced.
    MetadataLoaded,
    /// The full body has been read.
    BodyLoaded,
}
