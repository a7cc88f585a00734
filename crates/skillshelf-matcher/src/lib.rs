//! Trigger matcher
//!
//! Ranks documents against a free-text query using metadata only. The
//! matcher never sees bodies; the [`skillshelf_types::DocumentMetadata`]
//! input type enforces that by construction, so ranking cost is independent
//! of how large any document grows.

pub mod config;
pub mod matcher;

pub use config::MatcherConfig;
pub use matcher::{MatchCandidate, TriggerMatcher};
