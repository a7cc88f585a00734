//! Reference resolver
//!
//! Scans a document body for markdown inline links (`[text](target#fragment)`)
//! and produces `ReferenceLink` values lazily, in source order, duplicates
//! preserved. Target bodies are never touched here; this crate only parses.
//!
//! Malformed syntax (empty target, unterminated link) is skipped with a
//! warning so one bad link never blocks disclosure of the rest of the
//! document. Intra-document anchors (`#section`) and absolute URLs are not
//! references to other documents and are skipped silently.

pub mod links;

pub use links::{extract_links, Links};
